//! Prints the OpenAPI document for client type generation.
//!
//! `openapi-gen` emits JSON, `openapi-gen --yaml` emits YAML.
use anyhow::{Result, bail};
use kilo_backend::openapi::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn parse_format<I>(args: I) -> Result<Format>
where
    I: IntoIterator<Item = String>,
{
    let mut format = Format::Json;
    for arg in args {
        match arg.as_str() {
            "--yaml" => format = Format::Yaml,
            "--json" => format = Format::Json,
            other => bail!("unknown argument: {other} (expected --json or --yaml)"),
        }
    }
    Ok(format)
}

fn main() -> Result<()> {
    let doc = ApiDoc::openapi();
    let rendered = match parse_format(std::env::args().skip(1))? {
        Format::Json => doc.to_pretty_json()?,
        Format::Yaml => doc.to_yaml()?,
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn json_by_default() {
        assert_eq!(parse_format(args(&[])).unwrap(), Format::Json);
    }

    #[test]
    fn last_flag_wins() {
        assert_eq!(parse_format(args(&["--yaml"])).unwrap(), Format::Yaml);
        assert_eq!(parse_format(args(&["--yaml", "--json"])).unwrap(), Format::Json);
        assert_eq!(parse_format(args(&["--json", "--yaml"])).unwrap(), Format::Yaml);
    }

    #[test]
    fn unknown_argument_is_an_error() {
        let err = parse_format(args(&["--xml"])).unwrap_err();
        assert!(err.to_string().contains("--xml"));
    }
}
