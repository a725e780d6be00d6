//! Password prompt state

/// What a correct password unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPurpose {
    Admin,
    Exit,
}

impl PasswordPurpose {
    pub fn title(self) -> &'static str {
        match self {
            PasswordPurpose::Admin => "ADMIN ACCESS",
            PasswordPurpose::Exit => "CONFIRM EXIT",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            PasswordPurpose::Admin => "Enter admin password",
            PasswordPurpose::Exit => "Enter exit password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPrompt {
    purpose: PasswordPurpose,
    input: String,
}

impl PasswordPrompt {
    pub fn new(purpose: PasswordPurpose) -> Self {
        Self {
            purpose,
            input: String::new(),
        }
    }

    pub fn purpose(&self) -> PasswordPurpose {
        self.purpose
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// One `*` per typed character
    pub fn masked(&self) -> String {
        "*".repeat(self.input.chars().count())
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn verify(&self, expected: &str) -> bool {
        self.input == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masking_counts_characters() {
        let mut prompt = PasswordPrompt::new(PasswordPurpose::Exit);
        for c in "pä55".chars() {
            prompt.push_char(c);
        }
        assert_eq!(prompt.masked(), "****");
        assert!(prompt.verify("pä55"));
    }

    #[test]
    fn test_control_characters_ignored() {
        let mut prompt = PasswordPrompt::new(PasswordPurpose::Admin);
        prompt.push_char('a');
        prompt.push_char('\u{8}');
        prompt.push_char('\r');
        prompt.push_char('b');
        assert_eq!(prompt.input(), "ab");

        prompt.backspace();
        assert_eq!(prompt.input(), "a");
        prompt.clear();
        prompt.backspace();
        assert_eq!(prompt.input(), "");
    }

    #[test]
    fn test_purpose_labels() {
        assert_eq!(PasswordPurpose::Admin.title(), "ADMIN ACCESS");
        assert_eq!(PasswordPurpose::Exit.title(), "CONFIRM EXIT");
    }
}
