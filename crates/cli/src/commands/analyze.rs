//! Analyze command.

use anyhow::Result;
use esadmin_client::{AnalyzeOptions, AnalyzeToken, IndexAdmin};

use super::CommandContext;

/// Index name used for unbound analysis when `--index` is absent. Unbound
/// requests never put it on the wire.
const UNBOUND_PLACEHOLDER: &str = "_all";

#[derive(Debug, Default)]
pub struct AnalyzeArgs {
    pub analyzer: Option<String>,
    pub tokenizer: Option<String>,
    pub filters: Option<String>,
    pub field: Option<String>,
    pub unbound: bool,
    pub terms: bool,
}

impl AnalyzeArgs {
    fn options(&self) -> AnalyzeOptions {
        let mut options = AnalyzeOptions::new();
        if let Some(analyzer) = &self.analyzer {
            options = options.with_analyzer(analyzer);
        }
        if let Some(tokenizer) = &self.tokenizer {
            options = options.with_tokenizer(tokenizer);
        }
        if let Some(filters) = &self.filters {
            options = options.with_filters(filters);
        }
        if let Some(field) = &self.field {
            options = options.with_field(field);
        }
        if self.unbound {
            options = options.unbound();
        }
        options
    }
}

pub async fn run(ctx: &CommandContext, text: &str, args: &AnalyzeArgs) -> Result<()> {
    let index = if args.unbound && ctx.index.is_none() {
        IndexAdmin::new(UNBOUND_PLACEHOLDER, &ctx.transport)?
    } else {
        ctx.index_admin()?
    };
    let tokens: Vec<AnalyzeToken> = index.analyze(text, &args.options()).await?.collect();

    if args.terms {
        return ctx.output.lines(tokens.iter().map(|t| t.token.as_str()));
    }
    ctx.output.json(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_to_bound() {
        let options = AnalyzeArgs::default().options();
        assert!(options.bind_to_index);
        assert!(options.analyzer.is_none());
    }

    #[test]
    fn test_options_carry_flags() {
        let options = AnalyzeArgs {
            analyzer: Some("simple".into()),
            unbound: true,
            ..Default::default()
        }
        .options();
        assert_eq!(options.analyzer.as_deref(), Some("simple"));
        assert!(!options.bind_to_index);
    }
}
