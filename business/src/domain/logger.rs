/// Logging port for the catalog core. Adapters decide where messages go;
/// the domain only states their severity.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
