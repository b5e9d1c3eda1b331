use crate::{
    Directive, DirectiveFilters, Field, Message, Program, ProgramStat, Role, UniversityDetails,
};

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

impl DirectiveFilters {
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Field::Present(city.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Field::Present(tag.into());
        self
    }
}

impl Directive {
    #[must_use]
    pub fn with_filters(mut self, filters: DirectiveFilters) -> Self {
        self.filters = Field::Present(filters);
        self
    }

    #[must_use]
    pub fn with_highlight_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.highlight_ids = Field::Present(ids.into_iter().collect());
        self
    }
}

/// One headline figure of a university, ready to render as label + value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineStat {
    pub label: &'static str,
    pub value: String,
}

impl UniversityDetails {
    /// Students, yearly graduates, QS ranking and campuses, in that order.
    /// Figures the service did not report are skipped.
    pub fn headline_stats(&self) -> Vec<HeadlineStat> {
        [
            ("Students", self.students_count.map(|v| v.to_string())),
            (
                "Graduates yearly",
                self.graduates_yearly.map(|v| v.to_string()),
            ),
            ("QS ranking", self.qs_ranking.map(|v| format!("#{v}"))),
            ("Campuses", self.campuses_count.map(|v| v.to_string())),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| HeadlineStat { label, value }))
        .collect()
    }

    /// "City, Country" from whichever of the two is known.
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

impl Program {
    /// The stat row the service lists first, which is the most recent year.
    pub fn latest_stat(&self) -> Option<&ProgramStat> {
        self.program_stats.first()
    }
}
