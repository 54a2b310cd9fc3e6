use serde::Deserialize;
use seatbook_core::FormFields;
use crate::runner::ReplayReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The `seat_ids` payload as JSON
    #[default]
    Json,
    /// The whole form as an `application/x-www-form-urlencoded` body
    Form,
}

pub fn encode_form(fields: &FormFields) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in fields.iter() {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// One line per submission
pub fn render_submissions(
    report: &ReplayReport,
    format: OutputFormat,
) -> Result<Vec<String>, serde_json::Error> {
    report
        .submissions
        .iter()
        .map(|record| match format {
            OutputFormat::Json => serde_json::to_string(&record.payload),
            OutputFormat::Form => Ok(encode_form(&record.form)),
        })
        .collect()
}
