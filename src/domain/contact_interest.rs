/// The interest areas offered by the contact form's dropdown.
const OFFERED_INTERESTS: [&str; 7] = [
    "tech-skills",
    "data-analytics",
    "ai-implementation",
    "team-upskilling",
    "digital-transformation",
    "leadership-coaching",
    "other",
];

#[derive(Debug, Clone)]
pub struct ContactInterest(String);

impl ContactInterest {
    pub fn parse(s: String) -> Result<ContactInterest, String> {
        if OFFERED_INTERESTS.contains(&s.as_str()) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not one of the offered interest areas", s))
        }
    }
}

impl AsRef<str> for ContactInterest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
