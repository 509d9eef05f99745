use crate::imports::*;

/// Text encodings a [`Document`] can be read from or written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub const NAMES: [&'static str; 3] = ["yaml", "yml", "json"];

    /// Format named by `name`, with or without a leading dot
    pub fn parse(name: &str) -> anyhow::Result<Self> {
        match name.trim_start_matches('.').to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => bail!("Unsupported format {name:?}, must be one of {:?}", Self::NAMES),
        }
    }

    /// Format implied by the extension of `path`
    pub fn of_path(path: &Path) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .with_context(|| format!("No usable file extension on {path:?}"))?;
        Self::parse(extension)
    }
}

/// Input documents (drive plans) that are loaded from yaml or json and checked
/// once loaded.
pub trait Document: Serialize + for<'a> Deserialize<'a> {
    /// Rejects a freshly decoded document that is structurally valid but unusable.
    fn validate(&self) -> anyhow::Result<()> {
        Ok(())
    }

    fn decode(contents: &str, format: Format) -> anyhow::Result<Self> {
        let doc: Self = match format {
            Format::Yaml => serde_yaml::from_str(contents)?,
            Format::Json => serde_json::from_str(contents)?,
        };
        doc.validate()?;
        Ok(doc)
    }

    fn encode(&self, format: Format) -> anyhow::Result<String> {
        Ok(match format {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Json => serde_json::to_string(self)?,
        })
    }

    fn from_str<S: AsRef<str>>(contents: S, format: &str) -> anyhow::Result<Self> {
        Self::decode(contents.as_ref(), Format::parse(format)?)
    }

    fn to_str(&self, format: &str) -> anyhow::Result<String> {
        self.encode(Format::parse(format)?)
    }

    fn from_json<S: AsRef<str>>(json_str: S) -> anyhow::Result<Self> {
        Self::decode(json_str.as_ref(), Format::Json)
    }

    fn from_yaml<S: AsRef<str>>(yaml_str: S) -> anyhow::Result<Self> {
        Self::decode(yaml_str.as_ref(), Format::Yaml)
    }

    /// Loads a document, picking the format from the file extension.
    fn from_file<P: AsRef<Path>>(filepath: P) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let format = Format::of_path(filepath)?;
        let contents = std::fs::read_to_string(filepath).with_context(|| {
            if filepath.exists() {
                format!("Could not read file: {filepath:?}")
            } else {
                format!("File not found: {filepath:?}")
            }
        })?;
        Self::decode(&contents, format).with_context(|| format!("Invalid document: {filepath:?}"))
    }

    /// Saves a document, picking the format from the file extension. Nothing is
    /// created when the extension is not a known format.
    fn to_file<P: AsRef<Path>>(&self, filepath: P) -> anyhow::Result<()> {
        let filepath = filepath.as_ref();
        let contents = self.encode(Format::of_path(filepath)?)?;
        std::fs::write(filepath, contents)
            .with_context(|| format!("Could not write file: {filepath:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(Format::parse(".YML").unwrap(), Format::Yaml);
        assert_eq!(Format::parse("json").unwrap(), Format::Json);
        let err = Format::parse("toml").unwrap_err();
        assert!(err.to_string().contains("Unsupported format"));
    }

    #[test]
    fn test_format_of_path() {
        assert_eq!(Format::of_path(Path::new("a/plan.yaml")).unwrap(), Format::Yaml);
        assert!(Format::of_path(Path::new("plan")).is_err());
        assert!(Format::of_path(Path::new("plan.csv")).is_err());
    }
}
