//! Fixed prompts sent to the two model endpoints.

use crate::{Description, StyleChoice};

/// Instruction sent alongside the drawing to the vision endpoint.
pub const DESCRIBE_INSTRUCTION: &str = "Describe this image as detail as possible. \
The object position description should be exactly the same with the image. \
Do not mention about what kind of style use in this image for instance 'drawing','painting', etc. \
Just describe the object positions.";

/// Builds the image-generation prompt for a description and style.
///
/// Both the style label and the description text appear verbatim.
///
/// # Examples
///
/// ```
/// use sketch_core::{Description, StyleChoice, synthesis_prompt};
///
/// let prompt = synthesis_prompt(&Description::new("a red ball on a table"), StyleChoice::Anime);
/// assert!(prompt.contains("a red ball on a table"));
/// assert!(prompt.contains("Anime style"));
/// ```
pub fn synthesis_prompt(description: &Description, style: StyleChoice) -> String {
    let style = style.label();
    format!(
        "Create an photo-like image with {style} style and extremely detailed with natural \
         lighting and photo-cinematic for this description: {description}. Remember create in \
         {style} style and extremely detailed with natural lighting and photo-cinematic.",
        description = description.as_str(),
    )
}
