//! Lexical rule table
//! Priority-ordered (kind, pattern) pairs and longest-match selection

use crate::frontend::lexer::tokens::TokenKind;
use crate::util::config::LexerConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// What a rule does with the text it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Produce a token of this kind
    Emit(TokenKind),
    /// Consume the text without producing a token
    Skip,
}

/// A single lexical rule: an action and its anchored pattern
#[derive(Debug)]
pub struct TokenRule {
    pub action: RuleAction,
    pattern: Regex,
}

impl TokenRule {
    fn new(
        action: RuleAction,
        pattern: &str,
    ) -> Self {
        let anchored = format!("^(?:{})", pattern);
        Self {
            action,
            pattern: Regex::new(&anchored).expect("built-in lexical rule must compile"),
        }
    }

    /// Length in bytes of this rule's match at the start of `input`
    pub fn match_len(
        &self,
        input: &str,
    ) -> Option<usize> {
        self.pattern
            .find(input)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// Rules in priority order, highest first.
///
/// Keywords sit above `ID` and two-character operators above their
/// one-character prefixes; on equal match length the earlier rule wins.
const BASE_RULES: &[(RuleAction, &str)] = &[
    // Keywords
    (RuleAction::Emit(TokenKind::Select), "SELECT"),
    (RuleAction::Emit(TokenKind::From), "FROM"),
    (RuleAction::Emit(TokenKind::Where), "WHERE"),
    (RuleAction::Emit(TokenKind::And), "AND"),
    (RuleAction::Emit(TokenKind::Or), "OR"),
    (RuleAction::Emit(TokenKind::True), "true"),
    (RuleAction::Emit(TokenKind::False), "false"),
    // Operators
    (RuleAction::Emit(TokenKind::OpEq), "=="),
    (RuleAction::Emit(TokenKind::OpNeq), "!="),
    (RuleAction::Emit(TokenKind::OpGte), ">="),
    (RuleAction::Emit(TokenKind::OpLte), "<="),
    (RuleAction::Emit(TokenKind::OpGt), ">"),
    (RuleAction::Emit(TokenKind::OpLt), "<"),
    (RuleAction::Emit(TokenKind::OpMul), r"\*"),
    // Constants
    (RuleAction::Emit(TokenKind::String), r#""[^"]*""#),
    (RuleAction::Emit(TokenKind::Number), r"[0-9]+(?:\.[0-9]+)?"),
    // Identifiers
    (RuleAction::Emit(TokenKind::Id), r"[A-Za-z_][A-Za-z0-9_]*"),
    // Delimiters
    (RuleAction::Emit(TokenKind::Comma), ","),
    (RuleAction::Emit(TokenKind::LParen), r"\("),
    (RuleAction::Emit(TokenKind::RParen), r"\)"),
    (RuleAction::Emit(TokenKind::Semicolon), ";"),
    // Whitespace
    (RuleAction::Skip, r"[ \t\r\n]+"),
];

const LINE_COMMENT: &str = r"#[^\n]*";

static BASE_RULE_SET: Lazy<RuleSet> = Lazy::new(|| RuleSet::build(false));
static COMMENT_RULE_SET: Lazy<RuleSet> = Lazy::new(|| RuleSet::build(true));

/// Compiled, immutable rule table
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<TokenRule>,
}

impl RuleSet {
    fn build(line_comments: bool) -> Self {
        let mut rules: Vec<TokenRule> = BASE_RULES
            .iter()
            .map(|&(action, pattern)| TokenRule::new(action, pattern))
            .collect();
        if line_comments {
            rules.push(TokenRule::new(RuleAction::Skip, LINE_COMMENT));
        }
        Self { rules }
    }

    /// Shared rule table for a configuration
    pub fn for_config(config: &LexerConfig) -> &'static RuleSet {
        if config.line_comments {
            &*COMMENT_RULE_SET
        } else {
            &*BASE_RULE_SET
        }
    }

    /// Longest match at the start of `input`; ties go to the earlier rule
    pub fn longest_match(
        &self,
        input: &str,
    ) -> Option<(RuleAction, usize)> {
        let mut best: Option<(RuleAction, usize)> = None;
        for rule in &self.rules {
            if let Some(len) = rule.match_len(input) {
                if best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((rule.action, len));
                }
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
