//! Taxonomy kinds known to the WordPress REST API.

/// WordPress taxonomy kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    Categories,
    Tags,
}

impl Taxonomy {
    /// REST endpoint name for this taxonomy.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Tags => "tags",
        }
    }

    /// Singular term name, for messages.
    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::Categories => "category",
            Self::Tags => "tag",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_names() {
        assert_eq!(Taxonomy::Categories.endpoint(), "categories");
        assert_eq!(Taxonomy::Tags.endpoint(), "tags");
    }
}
