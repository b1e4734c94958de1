use anyhow::bail;

// the registration demo linked from the projects page
//
// nothing leaves the browser; the form only shows that it would have accepted
// the input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDemo {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl RegistrationDemo {
    pub fn check(&self) -> anyhow::Result<()> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            bail!("Please fill in every field.");
        }
        if self.password != self.confirm {
            bail!("Passwords do not match.");
        }
        Ok(())
    }

    pub fn greeting(&self) -> String {
        format!("Welcome aboard, {}!", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationDemo {
        RegistrationDemo {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "analytical".to_owned(),
            confirm: "analytical".to_owned(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert!(filled().check().is_ok());
        assert_eq!(filled().greeting(), "Welcome aboard, Ada!");
    }

    #[test]
    fn rejects_missing_field() {
        let mut form = filled();
        form.email.clear();
        assert_eq!(form.check().unwrap_err().to_string(), "Please fill in every field.");
    }

    #[test]
    fn rejects_mismatched_passwords() {
        let mut form = filled();
        form.confirm = "engine".to_owned();
        assert_eq!(form.check().unwrap_err().to_string(), "Passwords do not match.");
    }
}
