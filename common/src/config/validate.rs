/// Checks a loaded config before it is cached or written back.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
