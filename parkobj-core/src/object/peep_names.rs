//! Given names and surnames assigned to new guests.

use super::{Kind, Tables};
use crate::context::{ObjectError, ReadContext};
use crate::json::{self, Properties};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeepNames {
    /// Sorted.
    pub given_names: Vec<String>,
    /// Sorted.
    pub surnames:    Vec<String>,
}

impl Kind for PeepNames {
    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.given_names = read_names(ctx, props, "givenNames");
        self.surnames = read_names(ctx, props, "surnames");
    }
}

fn read_names(ctx: &mut ReadContext<'_>, props: &Properties, key: &str) -> Vec<String> {
    let mut names = json::string_list(props.get(key));
    if names.is_empty() {
        ctx.log_warning(ObjectError::InvalidProperty, format!("No {key} defined."));
    }
    names.sort_unstable();
    names
}
