use calculator_function::ApiDoc;
use service_kit::openapi_utils::to_pretty_json;
use utoipa::OpenApi;

// Prints the OpenAPI JSON document to standard output.
fn main() -> anyhow::Result<()> {
    let spec = to_pretty_json(&ApiDoc::openapi())?;
    print!("{}", spec);
    Ok(())
}
