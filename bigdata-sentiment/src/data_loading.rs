use {
    std::{fs::File, io::{BufRead, BufReader}, path::Path},
    anyhow::{anyhow, Result},
    tracing::{debug, info, warn},
    bigdata_sentiment_core::config::{InputConfig, InputFormat},
};

/// Reads the document as a sequence of lines. Read failures are logged and produce an
/// empty document, the classifier never sees an I/O error.
pub fn load_lines(path: &Path, input: &InputConfig) -> Vec<String> {
    debug!("using dataset: {}", path.display());

    let lines = match input.format {
        InputFormat::Lines => read_lines(path),
        InputFormat::Csv => read_csv_column(path, &input.csv_column),
    };

    match lines {
        Ok(lines) => {
            info!("loaded {} lines", lines.len());
            lines
        },
        Err(err) => {
            warn!("failed to read {}: {:#}", path.display(), err);
            Vec::new()
        }
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(reader.lines().collect::<Result<_, _>>()?)
}

fn read_csv_column(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let index = headers.iter()
        .position(|header| header == column)
        .ok_or_else(|| anyhow!("column \"{}\" not found in csv headers", column))?;

    reader.records()
        .map(|record| Ok(record?.get(index).unwrap_or_default().to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::{fmt, io::Write, sync::{Arc, Mutex}},
        tempfile::NamedTempFile,
        tracing::{field::{Field, Visit}, Event, Level, Subscriber},
        tracing_subscriber::{layer::Context, prelude::*, Layer},
    };

    #[derive(Clone, Default)]
    struct RecordedEvents(Arc<Mutex<Vec<(Level, String)>>>);

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S: Subscriber> Layer<S> for RecordedEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push((*event.metadata().level(), visitor.0));
        }
    }

    fn file_with(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    fn csv_input(column: &str) -> InputConfig {
        InputConfig {
            format: InputFormat::Csv,
            csv_column: column.to_owned(),
        }
    }

    #[test]
    fn strips_line_terminators() {
        let file = file_with(b"I love this\r\nI feel sad\n\nlast line");

        let lines = load_lines(file.path(), &InputConfig::default());

        assert_eq!(lines, vec!["I love this", "I feel sad", "", "last line"]);
    }

    #[test]
    fn dataset_path_is_logged_at_debug() {
        let file = file_with(b"I love this\n");
        let events = RecordedEvents::default();
        let subscriber = tracing_subscriber::registry().with(events.clone());

        tracing::subscriber::with_default(subscriber, || load_lines(file.path(), &InputConfig::default()));

        let events = events.0.lock().unwrap();
        let dataset = events.iter()
            .find(|(_, message)| message.starts_with("using dataset"))
            .unwrap();
        assert_eq!(dataset.0, Level::DEBUG);
    }

    #[test]
    fn missing_file_is_an_empty_document() {
        let lines = load_lines(Path::new("/no/such/dataset.txt"), &InputConfig::default());

        assert!(lines.is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_empty_document() {
        let file = file_with(b"fine line\n\xff\xfe broken\n");

        assert!(load_lines(file.path(), &InputConfig::default()).is_empty());
    }

    #[test]
    fn reads_configured_csv_column() {
        let file = file_with(b"id,text\n1,\"happy, really\"\n2,so sad\n");

        let lines = load_lines(file.path(), &csv_input("text"));

        assert_eq!(lines, vec!["happy, really", "so sad"]);
    }

    #[test]
    fn unknown_csv_column_is_an_empty_document() {
        let file = file_with(b"id,body\n1,happy\n");

        assert!(load_lines(file.path(), &csv_input("text")).is_empty());
    }
}
