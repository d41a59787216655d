use syn::LitStr;

/// Case conversion applied by `#[reflect(rename_all = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    LowerCase,
    UpperCase,
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
}

impl RenameRule {
    pub(crate) fn parse(lit: &LitStr) -> syn::Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => Self::LowerCase,
            "UPPERCASE" => Self::UpperCase,
            "PascalCase" => Self::PascalCase,
            "camelCase" => Self::CamelCase,
            "snake_case" => Self::SnakeCase,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnakeCase,
            "kebab-case" => Self::KebabCase,
            other => {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("unknown rename rule `{other}`"),
                ));
            }
        })
    }

    /// Applies the rule to a Rust identifier, either `snake_case` (fields) or
    /// `PascalCase` (variants).
    pub(crate) fn apply(self, ident: &str) -> String {
        let words = split_words(ident);
        match self {
            Self::LowerCase => words.concat(),
            Self::UpperCase => words.concat().to_uppercase(),
            Self::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
            Self::CamelCase => {
                let mut out = String::with_capacity(ident.len());
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(word);
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            Self::SnakeCase => words.join("_"),
            Self::ScreamingSnakeCase => words.join("_").to_uppercase(),
            Self::KebabCase => words.join("-"),
        }
    }
}

// Lowercase words of `snake_case` or `PascalCase` identifiers.
fn split_words(ident: &str) -> Vec<String> {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut words = Vec::new();
    for part in ident.split('_').filter(|p| !p.is_empty()) {
        let mut current = String::new();
        for ch in part.chars() {
            if ch.is_uppercase() && !current.is_empty() {
                words.push(core::mem::take(&mut current));
            }
            current.extend(ch.to_lowercase());
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::RenameRule;

    #[test]
    fn fields_and_variants() {
        assert_eq!(RenameRule::CamelCase.apply("menu_name"), "menuName");
        assert_eq!(RenameRule::CamelCase.apply("MenuName"), "menuName");
        assert_eq!(RenameRule::PascalCase.apply("menu_name"), "MenuName");
        assert_eq!(RenameRule::SnakeCase.apply("MenuName"), "menu_name");
        assert_eq!(RenameRule::ScreamingSnakeCase.apply("menu_name"), "MENU_NAME");
        assert_eq!(RenameRule::KebabCase.apply("r#type_id"), "type-id");
        assert_eq!(RenameRule::LowerCase.apply("Red"), "red");
    }
}
