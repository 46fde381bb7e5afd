//! Configuration validation.
//!
//! Every problem is collected so a user sees all of them in one run.

use reqwest::Url;

use super::DashboardConfig;

/// All validation problems of a config, as `field: message` strings.
pub fn validation_errors(config: &DashboardConfig) -> Vec<String> {
    let positive = [
        ("display.top_n", config.display.top_n as u64),
        ("display.turnos_page_size", config.display.turnos_page_size as u64),
        ("display.view_page_size", config.display.view_page_size as u64),
        ("http.timeout_secs", config.http.timeout_secs),
    ];

    let mut errors: Vec<String> = positive
        .iter()
        .filter(|(_, value)| *value == 0)
        .map(|(field, _)| format!("{field}: must be greater than 0"))
        .collect();

    let urls = [
        ("endpoints.turnos_url", &config.endpoints.turnos_url),
        ("endpoints.views_url", &config.endpoints.views_url),
    ];
    errors.extend(urls.iter().filter_map(|(field, url)| {
        let url = url.as_deref()?;
        Url::parse(url)
            .err()
            .map(|e| format!("{field}: invalid URL '{url}' ({e})"))
    }));

    errors
}

/// `Ok` when the config has no problems, otherwise every problem joined.
pub fn validate_config(config: &DashboardConfig) -> Result<(), String> {
    let errors = validation_errors(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&DashboardConfig::default()), Ok(()));
    }

    #[test]
    fn test_all_errors_are_reported() {
        let mut config = DashboardConfig::default();
        config.display.top_n = 0;
        config.http.timeout_secs = 0;
        config.endpoints.turnos_url = Some("not a url".into());

        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("display.top_n"));
        assert!(errors[1].starts_with("http.timeout_secs"));
        assert!(errors[2].starts_with("endpoints.turnos_url"));
    }
}
