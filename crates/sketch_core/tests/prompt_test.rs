use sketch_core::{
    DESCRIBE_INSTRUCTION, Description, GeneratedImageRef, RealizeOutcome, StyleChoice,
    synthesis_prompt,
};

#[test]
fn prompt_embeds_description_and_style() {
    let description = Description::new("a red ball on a table");
    let prompt = synthesis_prompt(&description, StyleChoice::Anime);

    assert!(prompt.contains("a red ball on a table"));
    assert!(prompt.contains("Anime"));
    assert_eq!(prompt.matches("Anime style").count(), 2);
}

#[test]
fn multi_word_style_is_embedded_verbatim() {
    let prompt = synthesis_prompt(&Description::new("a cat"), StyleChoice::PencilSketch);
    assert!(prompt.contains("with Pencil Sketch style"));
    assert!(prompt.contains("create in Pencil Sketch style"));
}

#[test]
fn instruction_asks_for_positions_only() {
    assert!(DESCRIBE_INSTRUCTION.starts_with("Describe this image as detail as possible."));
    assert!(DESCRIBE_INSTRUCTION.contains("Do not mention"));
    assert!(DESCRIBE_INSTRUCTION.ends_with("Just describe the object positions."));
}

#[test]
fn outcome_serializes_with_status_tag() -> anyhow::Result<()> {
    let outcome = RealizeOutcome::Realized {
        description: Description::new("a dog"),
        image: GeneratedImageRef::new("https://images.example/dog.png"),
    };
    let json = serde_json::to_value(&outcome)?;

    assert_eq!(json["status"], "realized");
    assert_eq!(json["description"], "a dog");
    assert_eq!(json["image"], "https://images.example/dog.png");
    assert!(outcome.is_realized());

    let failed = RealizeOutcome::Failed { message: "boom".to_string() };
    assert_eq!(serde_json::to_value(&failed)?["status"], "failed");
    assert!(!failed.is_realized());
    Ok(())
}
