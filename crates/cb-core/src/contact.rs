/// A validated (name, city, email) triple.
///
/// Fields hold the trimmed parts exactly as the validator produced them;
/// display normalisation happens at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub city: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, city: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            email: email.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.trim()
    }

    pub fn display_city(&self) -> &str {
        self.city.trim()
    }

    /// Emails are shown lower-cased; the stored value keeps its casing.
    pub fn display_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_email_is_lowercased_but_storage_is_not() {
        let contact = Contact::new("Alice", "Paris", "Alice.One@Example.COM");
        assert_eq!(contact.display_email(), "alice.one@example.com");
        assert_eq!(contact.email, "Alice.One@Example.COM");
    }

    #[test]
    fn display_fields_are_trimmed() {
        let contact = Contact::new("  Bob ", " Oslo", "bob@example.no ");
        assert_eq!(contact.display_name(), "Bob");
        assert_eq!(contact.display_city(), "Oslo");
        assert_eq!(contact.display_email(), "bob@example.no");
    }
}
