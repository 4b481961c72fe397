//! Config command handler

use crate::commands::ConfigArgs;
use crate::error::CliResult;
use calcboard::{CalcConfig, Grouping, NumberFormat};

/// Execute the config command
pub fn execute_config(config: &CalcConfig, args: &ConfigArgs) -> CliResult<()> {
    let text = if args.default {
        CalcConfig::default().to_yaml()?
    } else {
        describe_config(config, &config.number_format())?
    };
    print!("{text}");
    Ok(())
}

/// Resolved configuration as YAML, followed by the effective number format
pub fn describe_config(config: &CalcConfig, format: &NumberFormat) -> CliResult<String> {
    let mut text = config.to_yaml()?;
    text.push_str(&format!(
        "# effective: separator {:?}, grouping {}\n",
        format.separator,
        grouping_name(format.grouping)
    ));
    Ok(text)
}

fn grouping_name(grouping: Grouping) -> &'static str {
    match grouping {
        Grouping::Thousands => "thousands",
        Grouping::Indian => "indian",
        Grouping::None => "none",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_default() {
        let text = describe_config(&CalcConfig::default(), &NumberFormat::en_us()).unwrap();
        assert!(text.contains("mouse: true"));
        assert!(text.contains("show_help: true"));
        assert!(text.contains("# effective: separator \",\", grouping thousands"));
    }

    #[test]
    fn test_describe_is_loadable_yaml() {
        let config = CalcConfig::default().with_locale("en-IN");
        let format = config.number_format();
        let text = describe_config(&config, &format).unwrap();
        assert_eq!(CalcConfig::from_yaml_str(&text).unwrap(), config);
        assert!(text.contains("grouping indian"));
    }
}
