use smol_str::SmolStr;

use crate::parser::ast::DocComment;
use crate::parser::lexer::Token;
use crate::parser::syntax_kind::SyntaxKind;

/// Collect the `//` comment block that ends right before `tokens[keyword]`.
///
/// Any whitespace may separate the block from the keyword. Inside the block,
/// consecutive comments must sit on consecutive lines; a blank line ends it.
pub fn doc_comment(tokens: &[Token<'_>], keyword: usize) -> DocComment {
    let mut lines = Vec::new();
    let mut idx = keyword;

    if idx > 0 && tokens[idx - 1].kind == SyntaxKind::WHITESPACE {
        idx -= 1;
    }

    while idx > 0 && tokens[idx - 1].kind == SyntaxKind::LINE_COMMENT {
        idx -= 1;
        lines.push(comment_text(tokens[idx].text));

        let joined_to_previous = idx >= 2
            && tokens[idx - 1].kind == SyntaxKind::WHITESPACE
            && tokens[idx - 1].text.matches('\n').count() == 1
            && tokens[idx - 2].kind == SyntaxKind::LINE_COMMENT;
        if !joined_to_previous {
            break;
        }
        idx -= 1;
    }

    lines.reverse();
    DocComment::new(lines)
}

/// `//  Some text ` → `Some text`. Only the `//` opener is removed.
fn comment_text(comment: &str) -> SmolStr {
    SmolStr::new(comment.strip_prefix("//").unwrap_or(comment).trim())
}
