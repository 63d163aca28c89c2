use crate::{
    ast::ast::Program,
    errors::{
        diagnostic::{Diagnostic, ReportConfig},
        errors::GrammarInitError,
    },
    grammar::{self, grammar::Grammar},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
};

/// A compiled grammar paired with report settings: one entry point returning
/// either a program or a diagnostic.
///
/// Holds no mutable state, so one value can serve any number of parses,
/// including from several threads at once.
#[derive(Clone)]
pub struct Frontend<'g> {
    grammar: &'g Grammar,
    config: ReportConfig,
}

impl Frontend<'static> {
    /// Uses the built-in grammar, compiling it on first use.
    pub fn builtin() -> Result<Self, GrammarInitError> {
        Ok(Frontend::with_grammar(grammar::builtin()?))
    }
}

impl<'g> Frontend<'g> {
    pub fn with_grammar(grammar: &'g Grammar) -> Self {
        Frontend {
            grammar,
            config: ReportConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn get_grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn parse(&self, source: &str) -> Result<Program, Diagnostic> {
        parse(source, self.grammar).map_err(|error| Diagnostic::new(&error, source, &self.config))
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, Diagnostic> {
        tokenize(source, self.grammar)
            .map_err(|error| Diagnostic::new(&error, source, &self.config))
    }
}
