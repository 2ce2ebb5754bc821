use sketch_core::StyleChoice;

#[test]
fn dropdown_order_matches_offered_styles() {
    let labels: Vec<&str> = StyleChoice::all().iter().map(StyleChoice::label).collect();
    assert_eq!(
        labels,
        vec!["Photorealistic", "Matte Painting", "Anime", "Ghibli", "Pencil Sketch"]
    );
}

#[test]
fn every_label_parses_back() {
    for style in StyleChoice::all() {
        let parsed: StyleChoice = style.label().parse().expect("label should parse");
        assert_eq!(parsed, style);
        assert_eq!(style.to_string(), style.label());
    }
}

#[test]
fn unknown_label_is_rejected() {
    let err = "Cubism".parse::<StyleChoice>().unwrap_err();
    assert!(err.contains("Cubism"));
}

#[test]
fn default_is_first_entry() {
    assert_eq!(StyleChoice::default(), StyleChoice::Photorealistic);
}

#[test]
fn serializes_as_label() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&StyleChoice::PencilSketch)?, "\"Pencil Sketch\"");
    let style: StyleChoice = serde_json::from_str("\"Matte Painting\"")?;
    assert_eq!(style, StyleChoice::MattePainting);
    Ok(())
}

#[test]
fn label_display_and_serde_agree() -> anyhow::Result<()> {
    for style in StyleChoice::all() {
        let json = serde_json::to_string(&style)?;
        assert_eq!(json, format!("\"{}\"", style.label()));
        assert_eq!(json, format!("\"{}\"", style));
        let back: StyleChoice = serde_json::from_str(&json)?;
        assert_eq!(back, style);
    }
    Ok(())
}

#[test]
fn unknown_label_fails_to_deserialize() {
    let result = serde_json::from_str::<StyleChoice>("\"Cubism\"");
    assert!(result.is_err());
}
