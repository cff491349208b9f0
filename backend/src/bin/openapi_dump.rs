//! Print the OpenAPI document as JSON.

use std::io::Write;

use utoipa::OpenApi;
use westbook::doc::ApiDoc;

fn main() -> std::io::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(std::io::Error::other)?;
    writeln!(std::io::stdout().lock(), "{json}")
}
