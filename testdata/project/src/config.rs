pub struct Config {
    name: String,
}

impl Config {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub fn parse(input: &str) -> Option<Config> {
    // TODO: real parsing
    Some(Config::new(input))
}
