use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::email::EmailJsConfig;

// site configuration
//
// this struct holds everything about the site owner that the pages display, plus
// the identifiers the contact form needs.  the webapp embeds the toml at compile
// time, so a bad file shows up the first time the site is opened
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub profile: Profile,

    // missing entirely is allowed; the provider rejects the send and the contact
    // page reports the usual failure
    #[serde(default)]
    pub emailjs: EmailJsConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,

    // free-form lines for the availability box on the contact page
    #[serde(default)]
    pub availability: Vec<String>,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

// build-time replacements for the emailjs identifiers, so that a deployment can
// inject its own account without editing the checked-in toml
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmailJsOverrides {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub user_id: Option<String>,
}

impl EmailJsOverrides {
    pub fn from_build_env() -> Self {
        let var = |v: Option<&'static str>| v.map(str::to_owned);

        EmailJsOverrides {
            service_id: var(option_env!("EMAILJS_SERVICE_ID")),
            template_id: var(option_env!("EMAILJS_TEMPLATE_ID")),
            user_id: var(option_env!("EMAILJS_USER_ID")),
        }
    }
}

impl SiteConfig {
    pub fn with_overrides(mut self, overrides: EmailJsOverrides) -> Self {
        if let Some(v) = overrides.service_id {
            self.emailjs.service_id = v;
        }
        if let Some(v) = overrides.template_id {
            self.emailjs.template_id = v;
        }
        if let Some(v) = overrides.user_id {
            self.emailjs.user_id = v;
        }
        self
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip_all)]
pub fn read_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!("successfully parsed site config");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = r#"
[config.profile]
name = "SHEMA"
tagline = "Full Stack Developer"
avatar = "/facecard.jpg"
email = "owner@example.com"
phone = "+250788000000"
location = "Kigali, Rwanda"
github = "https://github.com/example"
linkedin = "https://linkedin.com/in/example"
availability = ["Monday - Friday: 9:00 AM - 5:00 PM", "Weekend: By appointment"]

[config.emailjs]
service_id = "service_site"
template_id = "template_site"
user_id = "key_site"
"#;

    #[test]
    fn parses_config_table() {
        let config = read_config(SITE).unwrap();

        assert_eq!(config.profile.name, "SHEMA");
        assert_eq!(config.profile.availability.len(), 2);
        assert_eq!(config.profile.mailto(), "mailto:owner@example.com");
        assert_eq!(config.emailjs.service_id, "service_site");
        assert!(config.emailjs.is_complete());
    }

    #[test]
    fn emailjs_table_is_optional() {
        let doc = SITE.split("[config.emailjs]").next().unwrap();
        let config = read_config(doc).unwrap();

        assert_eq!(config.emailjs, EmailJsConfig::default());
        assert!(!config.emailjs.is_complete());
    }

    #[test]
    fn overrides_replace_only_what_is_set() {
        let config = read_config(SITE).unwrap().with_overrides(EmailJsOverrides {
            service_id: Some("service_deploy".to_owned()),
            template_id: None,
            user_id: Some("key_deploy".to_owned()),
        });

        assert_eq!(config.emailjs.service_id, "service_deploy");
        assert_eq!(config.emailjs.template_id, "template_site");
        assert_eq!(config.emailjs.user_id, "key_deploy");
    }

    #[test]
    fn rejects_missing_profile() {
        let err = read_config("[config]\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse site config"));
    }
}
