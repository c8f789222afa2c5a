use rand::Rng;

// Intentionally not the full alphabet; changing these would change the
// shape of generated test data.
pub const RANDOM_STRING_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXTZabcdefghiklmnopqrstuvwxyz";
pub const RANDOM_EMAIL_CHARS: &str = "abcdefghiklmnopqrstuvwxyz";

pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

fn random_chars(charset: &str, length: usize) -> String {
    let chars: Vec<char> = charset.chars().collect();
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

#[derive(Debug, PartialEq, Clone)]
pub struct RandomStringFunction {
    pub length: usize,
}

impl RandomStringFunction {
    pub fn apply(&self) -> String {
        random_chars(RANDOM_STRING_CHARS, self.length)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct RandomEmailFunction {
    pub length: usize,
    pub domain: String,
}

impl RandomEmailFunction {
    pub fn apply(&self) -> String {
        let local_part = random_chars(RANDOM_EMAIL_CHARS, self.length);
        format!("{}@{}", local_part, self.domain)
    }
}
