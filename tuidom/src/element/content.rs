#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// A one-row rule that repeats the character across the full width.
    Rule(char),
}
