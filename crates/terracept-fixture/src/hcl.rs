use terracept_domain::TestData;

/// Escape a value for interpolation inside a quoted HCL string.
pub fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The shared fixture preamble: provider block plus the resource group every
/// network fixture creates its resources in.
pub fn preamble(data: &TestData) -> String {
    format!(
        r#"provider "azurerm" {{
  features {{}}
}}

resource "azurerm_resource_group" "test" {{
  name     = "acctestRG-{rand}"
  location = "{location}"
}}
"#,
        rand = data.random_integer,
        location = escape(&data.locations.primary),
    )
}

/// Render a `tags = {{ ... }}` body from key/value pairs, sorted by key so
/// fixture text is stable.
pub fn tags_block(pairs: &[(&str, &str)]) -> String {
    let mut sorted: Vec<_> = pairs.to_vec();
    sorted.sort_by_key(|(k, _)| *k);
    let mut out = String::from("  tags = {\n");
    for (k, v) in sorted {
        out.push_str(&format!("    {} = \"{}\"\n", k, escape(v)));
    }
    out.push_str("  }\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use terracept_domain::TestData;
    use uuid::Uuid;

    fn data() -> TestData {
        TestData::with_seed("azurerm_virtual_network", "test", Uuid::nil())
    }

    #[test]
    fn escape_quotes_and_backslashes() {
        assert_eq!(escape(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn preamble_contains_provider_and_group() {
        let text = preamble(&data());
        assert!(text.contains("provider \"azurerm\""));
        assert!(text.contains("resource \"azurerm_resource_group\" \"test\""));
        assert!(text.contains(&format!("acctestRG-{}", data().random_integer)));
        assert!(text.contains("location = \"eastus2\""));
    }

    #[test]
    fn tags_block_is_sorted_and_escaped() {
        let block = tags_block(&[("environment", "Prod\"uction"), ("cost_center", "MSFT")]);
        let cost = block.find("cost_center").unwrap();
        let env = block.find("environment").unwrap();
        assert!(cost < env);
        assert!(block.contains("Prod\\\"uction"));
    }
}
