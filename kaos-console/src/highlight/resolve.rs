//! Overlap resolution for scanned candidates

use super::token::Token;

/// Merge candidates into a single ordered, non-overlapping token list
///
/// Candidates must arrive grouped by kind in priority order (as produced by
/// [`super::lexer::scan`]). They are stably sorted by start offset, so a tie
/// keeps the higher-priority candidate first. A candidate is accepted only
/// when its start lies at or past the end of everything accepted so far.
pub fn resolve(mut candidates: Vec<Token<'_>>) -> Vec<Token<'_>> {
    candidates.sort_by_key(|token| token.start);

    let mut accepted: Vec<Token<'_>> = Vec::with_capacity(candidates.len());
    let mut covered_until = 0;

    for candidate in candidates {
        if candidate.start < covered_until {
            continue;
        }
        covered_until = covered_until.max(candidate.end());
        accepted.push(candidate);
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::lexer::scan;
    use crate::highlight::token::TokenKind;

    #[test]
    fn test_comment_swallows_keyword() {
        let tokens = resolve(scan("-- local foo"));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "-- local foo");
    }

    #[test]
    fn test_string_swallows_number_and_call() {
        let tokens = resolve(scan("x = \"f(1)\""));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
    }

    #[test]
    fn test_tie_goes_to_higher_priority() {
        // `function(` is both a keyword and a call candidate at offset 0
        let tokens = resolve(scan("function(a) end"));
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "function");
        assert_eq!(tokens.iter().filter(|t| t.start == 0).count(), 1);
    }

    #[test]
    fn test_result_is_sorted_and_disjoint() {
        let src = "local t = { \"a\", 'b' } -- note 3\nfor i = 1, #t do print(t[i]) end\n--[[ x ]] y(2.5)";
        let tokens = resolve(scan(src));
        assert!(!tokens.is_empty());
        for pair in tokens.windows(2) {
            assert!(pair[0].end() <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
        for token in &tokens {
            assert!(token.end() <= src.len());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve(Vec::new()).is_empty());
    }

    #[test]
    fn test_later_lower_priority_overlap_is_dropped() {
        let a = Token::new(TokenKind::Call, "abcdef", 0);
        let b = Token::new(TokenKind::Comment, "cd", 2);
        let c = Token::new(TokenKind::Number, "7", 6);
        let tokens = resolve(vec![b, a, c]);
        assert_eq!(tokens, vec![a, c]);
    }
}
