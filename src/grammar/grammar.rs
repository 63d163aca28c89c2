use std::collections::HashMap;

use regex::Regex;

use crate::{
    ast::{ast::NoReturn, statements::ReturnStmt},
    errors::errors::GrammarInitError,
    lexer::tokens::TokenKind,
    parser::lookups::{
        BPLookup, BindingPower, BlockContext, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StatementContext, StmtHandler, StmtLookup,
    },
};

use super::rules::{GrammarSpec, TokenAction};

/// A token rule with its regex anchored at the start of the remaining input.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    pub regex: Regex,
    pub action: TokenAction,
}

/// Compiled form of a [`GrammarSpec`].
///
/// Holds the anchored token regexes and the lookup tables the parser
/// dispatches on. Construction validates the `GrammarSpec`: every lookup yields at most
/// one action, which keeps parsing deterministic with one token of lookahead.
#[derive(Clone)]
pub struct Grammar {
    /// Token rules in priority order
    token_patterns: Vec<TokenPattern>,
    /// Reserved words and the kinds they lex to
    keywords: HashMap<&'static str, TokenKind>,
    /// Statement handlers for the main block
    main_stmt_lookup: StmtLookup<NoReturn>,
    /// Statement handlers for subroutine bodies
    subroutine_stmt_lookup: StmtLookup<ReturnStmt>,
    /// Null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Binding powers of infix operators
    binding_power_lookup: BPLookup,
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar")
            .field("token_patterns", &self.token_patterns)
            .field("keywords", &self.keywords)
            .field("prefix_kinds", &self.prefix_kinds())
            .field("infix", &self.binding_power_lookup)
            .finish_non_exhaustive()
    }
}

impl Grammar {
    pub fn compile(spec: &GrammarSpec) -> Result<Grammar, GrammarInitError> {
        let mut grammar = Grammar {
            token_patterns: Vec::with_capacity(spec.tokens.len()),
            keywords: HashMap::new(),
            main_stmt_lookup: HashMap::new(),
            subroutine_stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };

        for rule in &spec.tokens {
            let regex = Regex::new(&format!("^(?:{})", rule.pattern)).map_err(|source| {
                GrammarInitError::InvalidPattern {
                    pattern: rule.pattern.to_string(),
                    source,
                }
            })?;

            // An empty match would never advance the lexer.
            if regex.is_match("") {
                return Err(GrammarInitError::EmptyPattern {
                    pattern: rule.pattern.to_string(),
                });
            }

            grammar.token_patterns.push(TokenPattern {
                regex,
                action: rule.action,
            });
        }

        for (word, kind) in &spec.keywords {
            if grammar.keywords.insert(*word, *kind).is_some() {
                return Err(GrammarInitError::DuplicateKeyword {
                    word: word.to_string(),
                });
            }
        }

        for rule in &spec.statements {
            if let Some(handler) = rule.main {
                if grammar.main_stmt_lookup.insert(rule.starter, handler).is_some() {
                    return Err(GrammarInitError::AmbiguousStatement {
                        token: rule.starter,
                        context: StatementContext::Main,
                    });
                }
            }

            if let Some(handler) = rule.subroutine {
                if grammar
                    .subroutine_stmt_lookup
                    .insert(rule.starter, handler)
                    .is_some()
                {
                    return Err(GrammarInitError::AmbiguousStatement {
                        token: rule.starter,
                        context: StatementContext::Subroutine,
                    });
                }
            }
        }

        for rule in &spec.prefix {
            if grammar.nud_lookup.insert(rule.token, rule.handler).is_some() {
                return Err(GrammarInitError::AmbiguousPrefix { token: rule.token });
            }
        }

        for rule in &spec.infix {
            if rule.binding_power <= BindingPower::Default
                || rule.binding_power >= BindingPower::Primary
            {
                return Err(GrammarInitError::InvalidBindingPower {
                    token: rule.token,
                    binding_power: rule.binding_power,
                });
            }

            if grammar.led_lookup.insert(rule.token, rule.handler).is_some() {
                return Err(GrammarInitError::AmbiguousInfix { token: rule.token });
            }
            grammar
                .binding_power_lookup
                .insert(rule.token, rule.binding_power);
        }

        Ok(grammar)
    }

    pub fn get_token_patterns(&self) -> &[TokenPattern] {
        &self.token_patterns
    }

    pub fn keyword(&self, word: &str) -> Option<TokenKind> {
        self.keywords.get(word).copied()
    }

    pub fn main_stmt_lookup(&self) -> &StmtLookup<NoReturn> {
        &self.main_stmt_lookup
    }

    pub fn subroutine_stmt_lookup(&self) -> &StmtLookup<ReturnStmt> {
        &self.subroutine_stmt_lookup
    }

    /// Handler for a statement starting with `kind` in blocks whose return
    /// slot is `R`.
    pub fn stmt_handler<R: BlockContext>(&self, kind: TokenKind) -> Option<StmtHandler<R>> {
        R::stmt_lookup(self).get(&kind).copied()
    }

    /// Token kinds that can start a statement in `context`.
    pub fn statement_starters(&self, context: StatementContext) -> Vec<TokenKind> {
        match context {
            StatementContext::Main => self.main_stmt_lookup.keys().copied().collect(),
            StatementContext::Subroutine => self.subroutine_stmt_lookup.keys().copied().collect(),
        }
    }

    pub fn nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn prefix_kinds(&self) -> Vec<TokenKind> {
        self.nud_lookup.keys().copied().collect()
    }

    pub fn led_handler(&self, kind: TokenKind) -> Option<(BindingPower, LEDHandler)> {
        let handler = self.led_lookup.get(&kind)?;
        let binding_power = self.binding_power_lookup.get(&kind)?;
        Some((*binding_power, *handler))
    }

    /// Infix operators that bind tighter than `bp`, i.e. those that could
    /// extend an expression being parsed at that binding power.
    pub fn infix_kinds_above(&self, bp: BindingPower) -> Vec<TokenKind> {
        self.binding_power_lookup
            .iter()
            .filter(|(_, power)| **power > bp)
            .map(|(kind, _)| *kind)
            .collect()
    }
}
