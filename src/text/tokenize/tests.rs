use super::*;

#[test]
fn test_whitespace_empty_input() {
    let tokenizer = WhitespaceTokenizer::new();
    let tokens = tokenizer.tokenize("").expect("tokenize should succeed");
    assert!(tokens.is_empty());

    let tokens = tokenizer.tokenize("   \n\t ").expect("tokenize should succeed");
    assert!(tokens.is_empty());
}

#[test]
fn test_whitespace_preserves_case_and_punctuation() {
    let tokenizer = WhitespaceTokenizer::new();
    let tokens = tokenizer
        .tokenize("FREE money!!! Click:here")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["FREE", "money!!!", "Click:here"]);
}

#[test]
fn test_word_tokenizer_splits_punctuation() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer
        .tokenize("Subject: WIN a prize, today.")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["subject", "win", "a", "prize", "today"]);
}

#[test]
fn test_word_tokenizer_keeps_digits() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer
        .tokenize("only $99.95 for 2 pills")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["only", "99", "95", "for", "2", "pills"]);
}

#[test]
fn test_word_tokenizer_strips_outer_apostrophes() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer
        .tokenize("'quoted' it's")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["quoted", "it's"]);
}

#[test]
fn test_word_tokenizer_without_lowercase() {
    let tokenizer = WordTokenizer::new().with_lowercase(false);
    let tokens = tokenizer.tokenize("Buy NOW").expect("tokenize should succeed");
    assert_eq!(tokens, vec!["Buy", "NOW"]);
}

#[test]
fn test_word_tokenizer_unicode() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer
        .tokenize("Café über-cheap")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["café", "über", "cheap"]);
}

#[test]
fn test_tokenizer_trait_object() {
    let tokenizers: Vec<Box<dyn Tokenizer>> = vec![
        Box::new(WhitespaceTokenizer::new()),
        Box::new(WordTokenizer::new()),
    ];
    for tokenizer in &tokenizers {
        let tokens = tokenizer.tokenize("a b").expect("tokenize should succeed");
        assert_eq!(tokens.len(), 2);
    }
}
