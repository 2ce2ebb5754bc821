// Description client tests against a mocked completions endpoint.

use serde_json::{Value, json};
use sketch_core::{DESCRIBE_INSTRUCTION, EncodedImage};
use sketch_error::{SketchErrorKind, VisionErrorKind};
use sketch_interface::Describer;
use sketch_models::{OpenAiConfig, VisionClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> anyhow::Result<VisionClient> {
    let config = OpenAiConfig::default()
        .with_base_url(format!("{}/v1", server.uri()))
        .with_api_key("test-key");
    Ok(VisionClient::new(config)?)
}

fn drawing() -> EncodedImage {
    EncodedImage::from("aGVsbG8=".to_string())
}

fn vision_kind(err: &sketch_error::SketchError) -> &VisionErrorKind {
    match err.kind() {
        SketchErrorKind::Vision(e) => &e.kind,
        other => panic!("expected vision error, got {:?}", other),
    }
}

#[tokio::test]
async fn returns_first_choice_content() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "a red ball on a table"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let description = client_for(&server)?.describe(&drawing()).await?;

    assert_eq!(description.as_str(), "a red ball on a table");
    Ok(())
}

#[tokio::test]
async fn sends_instruction_image_and_token_cap() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "two trees"}}]
        })))
        .mount(&server)
        .await;

    client_for(&server)?.describe(&drawing()).await?;

    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1);

    let body: Value = requests[0].body_json()?;
    assert_eq!(body["model"], "gpt-4-vision-preview");
    assert_eq!(body["max_tokens"], 300);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"][0]["type"], "text");
    assert_eq!(body["messages"][0]["content"][0]["text"], DESCRIBE_INSTRUCTION);
    assert_eq!(body["messages"][0]["content"][1]["type"], "image_url");
    assert_eq!(
        body["messages"][0]["content"][1]["image_url"]["url"],
        "data:image/jpeg;base64,aGVsbG8="
    );
    Ok(())
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)?
        .describe(&drawing())
        .await
        .expect_err("500 must not yield a description");

    assert_eq!(
        vision_kind(&err),
        &VisionErrorKind::Status {
            status: 500,
            body: "server error".to_string(),
        }
    );
    let message = err.user_message();
    assert!(message.contains("500"));
    assert!(message.contains("server error"));
    Ok(())
}

#[tokio::test]
async fn unexpected_shape_is_a_field_access_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": "shape"})))
        .mount(&server)
        .await;

    let err = client_for(&server)?
        .describe(&drawing())
        .await
        .expect_err("unexpected shape must not yield a description");

    assert_eq!(
        vision_kind(&err),
        &VisionErrorKind::MissingField("choices".to_string())
    );
    assert!(err.user_message().starts_with("KeyError: 'choices'"));
    Ok(())
}

#[tokio::test]
async fn non_json_success_is_a_parse_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)?.describe(&drawing()).await.unwrap_err();

    assert!(matches!(vision_kind(&err), VisionErrorKind::Parse(_)));
    Ok(())
}

#[tokio::test]
async fn non_200_success_status_is_still_an_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
        .mount(&server)
        .await;

    let err = client_for(&server)?.describe(&drawing()).await.unwrap_err();

    assert!(matches!(
        vision_kind(&err),
        VisionErrorKind::Status { status: 202, .. }
    ));
    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() -> anyhow::Result<()> {
    let config = OpenAiConfig::default()
        .with_base_url("http://127.0.0.1:1/v1")
        .with_api_key("test-key");
    let client = VisionClient::new(config)?;

    let err = client.describe(&drawing()).await.unwrap_err();

    assert!(matches!(vision_kind(&err), VisionErrorKind::Transport(_)));
    Ok(())
}

#[test]
fn missing_api_key_is_a_config_error() {
    let err = VisionClient::new(OpenAiConfig::default()).unwrap_err();
    assert!(matches!(err.kind(), SketchErrorKind::Config(_)));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn describes_a_real_drawing() -> anyhow::Result<()> {
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use sketch_core::SourceImage;

    dotenvy::dotenv().ok();
    let config = OpenAiConfig::default().with_api_key(std::env::var("OPENAI_API_KEY")?);
    let client = VisionClient::new(config)?;

    let mut canvas = RgbImage::from_pixel(64, 64, Rgb([255, 255, 255]));
    for x in 16..48 {
        for y in 16..48 {
            canvas.put_pixel(x, y, Rgb([220, 20, 20]));
        }
    }
    let mut png = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(canvas).write_to(&mut png, ImageFormat::Png)?;

    let source = SourceImage::from_bytes(&png.into_inner())?;
    let description = client.describe(&EncodedImage::encode(&source)?).await?;

    assert!(!description.as_str().is_empty());
    println!("Description: {}", description);
    Ok(())
}
