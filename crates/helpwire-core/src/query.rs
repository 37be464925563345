//! Query-string encoding for list options.

/// Option sets that encode themselves as query parameters.
///
/// Implementations emit only the parameters that are actually set; an empty
/// vec leaves the request path untouched.
pub trait QueryOptions {
    fn to_params(&self) -> Vec<(&'static str, String)>;
}

/// Append the encoded options to `path`.
pub fn append_options(path: &str, options: &impl QueryOptions) -> String {
    let params = options.to_params();
    if params.is_empty() {
        return path.to_string();
    }

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in &params {
        serializer.append_pair(key, value);
    }
    format!("{}?{}", path, serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeOptions {
        name: Option<String>,
        size: Option<u64>,
    }

    impl QueryOptions for FakeOptions {
        fn to_params(&self) -> Vec<(&'static str, String)> {
            let mut params = Vec::new();
            if let Some(name) = &self.name {
                params.push(("filter[name]", name.clone()));
            }
            if let Some(size) = self.size {
                params.push(("page[size]", size.to_string()));
            }
            params
        }
    }

    #[test]
    fn test_empty_options_leave_path_unchanged() {
        let options = FakeOptions { name: None, size: None };
        assert_eq!(append_options("/webhooks", &options), "/webhooks");
    }

    #[test]
    fn test_set_options_are_encoded() {
        let options = FakeOptions {
            name: Some("orders".to_string()),
            size: Some(25),
        };
        assert_eq!(
            append_options("/webhooks", &options),
            "/webhooks?filter%5Bname%5D=orders&page%5Bsize%5D=25"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let options = FakeOptions {
            name: Some("a b&c".to_string()),
            size: None,
        };
        assert_eq!(
            append_options("/webhooks", &options),
            "/webhooks?filter%5Bname%5D=a+b%26c"
        );
    }
}
