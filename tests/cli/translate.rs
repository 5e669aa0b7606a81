use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const DASHBOARD: &str =
    r#"{"slug":"dash1","widgets":[{"type":"table","description":"Resumen de ventas"}]}"#;

const EXPECTED: &str = r#"{
  "i18n": {
    "es": {
      "dash1-resumen-ventas": "Resumen de ventas"
    }
  },
  "slug": "dash1",
  "widgets": [
    {
      "description": "dash1-resumen-ventas",
      "type": "table"
    }
  ]
}
"#;

fn parse(content: &str) -> Result<Value> {
    serde_json::from_str(content).context("output should be valid JSON")
}

#[test]
fn test_missing_input_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    insta::with_settings!({filters => vec![
        (r"(?s)\n\nArguments:.*\n----- stderr -----", "\n\n[ARGUMENTS]\n----- stderr -----"),
    ]}, {
        assert_cmd_snapshot!(test.command(), @r"
        success: false
        exit_code: 1
        ----- stdout -----
        Replace hardcoded dashboard literals with generated i18n labels

        Usage: dashi18n [OPTIONS] [INPUT] [OUTPUT]

        [ARGUMENTS]
        ----- stderr -----
        ");
    });
    Ok(())
}
#[test]
fn test_translate_to_stdout() -> Result<()> {
    let test = CliTest::with_file("dashboard.json", DASHBOARD)?;
    let mut cmd = test.command();
    cmd.arg("dashboard.json");

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "i18n": {
        "es": {
          "dash1-resumen-ventas": "Resumen de ventas"
        }
      },
      "slug": "dash1",
      "widgets": [
        {
          "description": "dash1-resumen-ventas",
          "type": "table"
        }
      ]
    }

    ----- stderr -----
    "#);
    Ok(())
}
#[test]
fn test_translate_to_output_file() -> Result<()> {
    let test = CliTest::with_file("dashboard.json", DASHBOARD)?;
    let output = test.run(&["dashboard.json", "out/translated.json"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("out/translated.json").exists());

    let output = test.run(&["dashboard.json", "translated.json"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert_eq!(test.read_file("translated.json")?, EXPECTED);
    assert_eq!(test.read_file("dashboard.json")?, DASHBOARD);
    Ok(())
}

#[test]
fn test_second_run_is_identical() -> Result<()> {
    let test = CliTest::with_file(
        "ventas.json",
        r#"{
  "slug": "ventas",
  "name": "Panel de ventas",
  "widgets": [
    {"type": "timeseries", "conf": {"title": "Evolución mensual de las ventas por zona", "lines": [{"label": "Total"}, {"label": "total"}]}},
    {"type": "table", "conf": {"columns": [{"name": "Total"}]}}
  ],
  "i18n": {"en": {}}
}"#,
    )?;

    let first = test.run(&["ventas.json", "once.json"])?;
    assert_eq!(first.status.code(), Some(0), "{}", stderr(&first));
    let second = test.run(&["once.json", "twice.json"])?;
    assert_eq!(second.status.code(), Some(0), "{}", stderr(&second));

    let once = test.read_file("once.json")?;
    assert_eq!(test.read_file("twice.json")?, once);

    let doc = parse(&once)?;
    assert_eq!(doc["name"], "ventas-panel-ventas");
    assert_eq!(doc["widgets"][0]["conf"]["title"], "ventas-text-e0ff");
    assert_eq!(doc["widgets"][0]["conf"]["lines"][1]["label"], "ventas-total-9949");
    assert_eq!(doc["i18n"]["en"], json!({}));
    Ok(())
}

#[test]
fn test_secondary_translations_follow_new_labels() -> Result<()> {
    let test = CliTest::with_file(
        "panel.json",
        r#"{
  "slug": "panel",
  "name": "old-name",
  "i18n": {
    "es": {"old-name": "Cuadro de mando", "old-gone": "Ya no existe"},
    "en": {"old-name": "Dashboard", "old-gone": "Gone", "old-orphan": "Orphan"}
  }
}"#,
    )?;
    let output = test.run(&["panel.json"])?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let doc = parse(&stdout(&output))?;
    assert_eq!(doc["name"], "panel-cuadro-mando");
    assert_eq!(
        doc["i18n"],
        json!({
            "en": {"panel-cuadro-mando": "Dashboard"},
            "es": {"panel-cuadro-mando": "Cuadro de mando"}
        })
    );

    let warnings = stderr(&output);
    assert!(warnings.contains("old-gone"), "{}", warnings);
    assert!(warnings.contains("old-orphan"), "{}", warnings);
    Ok(())
}

#[test]
fn test_strict_fails_on_orphaned_translation() -> Result<()> {
    let test = CliTest::with_file(
        "panel.json",
        r#"{"name": "Panel", "i18n": {"es": {}, "en": {"old-orphan": "Orphan"}}}"#,
    )?;
    let mut cmd = test.command();
    cmd.args(["--strict", "panel.json", "out.json"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to translate panel.json: Translation "old-orphan" in language "en" has no entry in primary language "es"
    "#);
    assert!(!test.root().join("out.json").exists());
    Ok(())
}
#[test]
fn test_invalid_json_is_fatal() -> Result<()> {
    let test = CliTest::with_file("broken.json", r#"{"slug": "x", "#)?;
    let mut cmd = test.command();
    cmd.args(["broken.json", "out.json"]);

    insta::with_settings!({filters => vec![
        (r"(Failed to parse JSON: broken\.json): .*", "$1: [PARSE ERROR]"),
    ]}, {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to parse JSON: broken.json: [PARSE ERROR]
        ");
    });
    assert!(!test.root().join("out.json").exists());
    Ok(())
}
#[test]
fn test_missing_input_file_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["missing.json"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file"), "{}", stderr(&output));
    Ok(())
}

#[test]
fn test_config_file_is_applied() -> Result<()> {
    let test = CliTest::with_file(
        "dashboards/sales.json",
        r#"{"name": "Sales by region", "footer": "Own source"}"#,
    )?;
    test.write_file(
        ".dashi18nrc.json",
        r#"{"primaryLocale": "en", "stopwords": ["by"], "extraPaths": ["$.footer"]}"#,
    )?;
    let output = test.run(&["dashboards/sales.json"])?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let doc = parse(&stdout(&output))?;
    assert_eq!(doc["name"], "sales-sales-region");
    assert_eq!(doc["footer"], "sales-own-source");
    assert_eq!(
        doc["i18n"],
        json!({"en": {"sales-sales-region": "Sales by region", "sales-own-source": "Own source"}})
    );
    Ok(())
}

#[test]
fn test_primary_locale_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file("p.json", r#"{"name": "Panel"}"#)?;
    test.write_file(".dashi18nrc.json", r#"{"primaryLocale": "en"}"#)?;
    let output = test.run(&["--primary-locale", "ca", "p.json"])?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let doc = parse(&stdout(&output))?;
    assert_eq!(doc["i18n"], json!({"ca": {"p-panel": "Panel"}}));
    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file("p.json", r#"{"name": "Panel"}"#)?;
    test.write_file(".dashi18nrc.json", r#"{"extraPaths": ["footer"]}"#)?;
    let output = test.run(&["p.json"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("extraPaths"), "{}", stderr(&output));
    Ok(())
}

#[test]
fn test_verbose_prints_summary() -> Result<()> {
    let test = CliTest::with_file("dashboard.json", DASHBOARD)?;
    let mut cmd = test.command();
    cmd.args(["-v", "dashboard.json", "translated.json"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    debug: $.widgets[0].description = "Resumen de ventas" -> dash1-resumen-ventas
    ✓ dashboard.json: 1 literal replaced with 1 label
      prefix: dash1
      written to translated.json
    "#);
    assert_eq!(test.read_file("translated.json")?, EXPECTED);
    Ok(())
}
