// Tests for loading template settings and driving the command line

use std::io::Write;

use tempfile::NamedTempFile;
use uritemplate::cli;
use uritemplate::config::TemplateSettings;

fn write_settings(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let matches = cli::build_command().try_get_matches_from(args)?;
    cli::run(&matches)
}

#[test]
fn test_load_yaml_file() {
    let file = write_settings(
        "template: 'http://example.com{+path}{?list*}'\n\
         defaults:\n  path: /search\n\
         variables:\n  list: [red, green]\n",
        ".yml",
    );

    let settings = TemplateSettings::load(file.path()).unwrap();
    let template = settings.template().unwrap().unwrap();
    assert_eq!(
        template.expand(&settings.variables().unwrap()),
        "http://example.com/search?list=red&list=green"
    );
}

#[test]
fn test_load_missing_file_fails() {
    let err = TemplateSettings::load(std::path::Path::new("/nonexistent/settings.yml")).unwrap_err();
    assert!(err.to_string().contains("Could not read settings file"));
}

#[test]
fn test_cli_uses_config_file() {
    let file = write_settings(
        r#"{"template": "{/who}{?q}", "variables": {"who": "fred", "q": "x"}}"#,
        ".json",
    );
    let path = file.path().to_str().unwrap();

    assert_eq!(run(&["uritemplate", "-c", path]).unwrap(), "/fred?q=x");
    assert_eq!(
        run(&["uritemplate", "-c", path, "-V", "q=hello world"]).unwrap(),
        "/fred?q=hello%20world"
    );
    assert_eq!(
        run(&["uritemplate", "{who}", "--config", path]).unwrap(),
        "fred"
    );
}

#[test]
fn test_cli_reports_invalid_config_variable() {
    let file = write_settings("template: '{a}'\nvariables:\n  a: [[1]]\n", ".yml");
    let path = file.path().to_str().unwrap();

    let err = run(&["uritemplate", "-c", path]).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid variable 'a'"));
}

#[test]
fn test_cli_reports_non_string_template() {
    let file = write_settings("template: [1, 2]\n", ".yml");
    let path = file.path().to_str().unwrap();

    let err = run(&["uritemplate", "-c", path]).unwrap_err();
    assert!(err.to_string().contains("must be a string, found a list"));
}
