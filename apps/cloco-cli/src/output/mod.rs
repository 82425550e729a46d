//! Terminal output helpers

mod json;
mod printer;

pub use json::{configuration_data, format_json};
pub use printer::{print_body, print_config, print_info, print_success, print_warning};

/// How a successful response body is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Body printed verbatim
    Raw,
    /// Body re-indented as sorted JSON, verbatim when it is not JSON
    Json,
    /// Only the `configurationData` field of a configuration object
    ConfigurationData,
}

/// Print a successful response body
pub fn render(body: &str, mode: Render) {
    match mode {
        Render::Raw => print_body(body),
        Render::Json => {
            if body.trim().is_empty() {
                return;
            }
            match format_json(body) {
                Some(formatted) => print_body(&formatted),
                None => print_body(body),
            }
        }
        Render::ConfigurationData => match configuration_data(body) {
            Some(data) => print_body(&data),
            None => {
                print_warning("Response has no configurationData field, showing it unchanged.");
                print_body(body);
            }
        },
    }
}
