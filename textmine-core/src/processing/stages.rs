//! Standard stages for pipelines over token sequences
//!
//! Structural edits go through a [`SequenceCursor`](crate::sequence::SequenceCursor)
//! so the sequence's modification count stays authoritative.

use super::{from_fn, Processor};
use crate::dictionary::{Dictionary, Matcher};
use crate::sequence::TokenSequence;
use crate::token::{AssociationType, MutableToken, Token, ValueToken};
use crate::tokenizer::Tokenizer;
use crate::{Error, Result};
use std::sync::Arc;
use tracing::{debug, trace};

/// A sequence of revisable tokens that may carry values
pub type ValueSequence<V> = TokenSequence<MutableToken<ValueToken<V>>>;

/// Transform every token
pub fn map<T, U, F>(mapper: F) -> impl Processor<TokenSequence<T>, TokenSequence<U>>
where
    F: Fn(T) -> Result<U> + Send + Sync,
{
    from_fn(move |sequence: TokenSequence<T>| TokenSequence::try_create_mapped(sequence, &mapper))
}

/// Transform the whole input at once
pub fn map_sequence<I, O, F>(mapper: F) -> impl Processor<I, O>
where
    F: Fn(I) -> Result<O> + Send + Sync,
{
    from_fn(mapper)
}

/// Split text into a position-ordered token sequence
pub fn tokenize<Z>(tokenizer: Z) -> impl Processor<String, TokenSequence<Z::Token>>
where
    Z: Tokenizer,
    Z::Token: Clone,
{
    from_fn(move |text: String| Ok(TokenSequence::create_sorted(tokenizer.tokenize(&text)?)))
}

/// Attach the value of the dictionary entry whose key equals a token's text
///
/// The token's previous state is kept under `revision`. Tokens without an
/// entry pass through unchanged.
pub fn translate<V>(
    dictionary: Arc<Dictionary<String, V>>,
    revision: u32,
) -> impl Processor<ValueSequence<V>, ValueSequence<V>>
where
    V: Clone + Send + Sync,
{
    from_fn(move |sequence| {
        translate_each(sequence, revision, |text| {
            Ok(dictionary
                .lookup(text)
                .map(|entry| (entry.value().clone(), entry.association())))
        })
    })
}

/// Attach the value of the entry best matching a token's text according to `matcher`
pub fn translate_with<V>(
    dictionary: Arc<Dictionary<String, V>>,
    matcher: Matcher,
    revision: u32,
) -> impl Processor<ValueSequence<V>, ValueSequence<V>>
where
    V: Clone + Send + Sync,
{
    from_fn(move |sequence| {
        translate_each(sequence, revision, |text| {
            let matches = dictionary.lookup_matching(text, &matcher)?;
            Ok(matches.best_match().map(|found| {
                let entry = found.entry();
                (entry.value().clone(), entry.association())
            }))
        })
    })
}

fn translate_each<V, L>(
    mut sequence: ValueSequence<V>,
    revision: u32,
    lookup: L,
) -> Result<ValueSequence<V>>
where
    L: Fn(&str) -> Result<Option<(V, Option<AssociationType>)>>,
{
    let mut cursor = sequence.cursor(0)?;

    while cursor.has_next(&sequence)? {
        cursor.next(&sequence)?;
        let token = cursor.current_mut(&mut sequence)?;
        let text = token.text().into_owned();

        if let Some((value, association)) = lookup(&text)? {
            trace!("translated {text:?} (association {association:?})");
            let resolved = token.get().resolve(value, association);
            token.set(revision, resolved);
        }
    }

    Ok(sequence)
}

/// Drop every token satisfying `predicate`
pub fn remove<T, P>(predicate: P) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    from_fn(move |sequence| remove_where(sequence, &predicate))
}

/// Drop every token whose text matches `key` according to `matcher`
pub fn remove_matching<T>(
    matcher: Matcher,
    key: impl Into<String>,
) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    T: Token,
{
    let key = key.into();
    from_fn(move |sequence| {
        let mut failure = None;
        let sequence = remove_where(sequence, |token: &T| {
            matcher
                .matches(&token.text(), &key)
                .unwrap_or_else(|e| {
                    failure.get_or_insert(e);
                    false
                })
        })?;
        failure.map_or(Ok(sequence), Err)
    })
}

/// Keep only the tokens satisfying `predicate`
pub fn retain<T, P>(predicate: P) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    from_fn(move |sequence| remove_where(sequence, |token| !predicate(token)))
}

/// Keep only the tokens whose text matches `key` according to `matcher`
pub fn retain_matching<T>(
    matcher: Matcher,
    key: impl Into<String>,
) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    T: Token,
{
    let key = key.into();
    from_fn(move |sequence| {
        let mut failure = None;
        let sequence = remove_where(sequence, |token: &T| {
            !matcher
                .matches(&token.text(), &key)
                .unwrap_or_else(|e| {
                    failure.get_or_insert(e);
                    true
                })
        })?;
        failure.map_or(Ok(sequence), Err)
    })
}

fn remove_where<T>(
    mut sequence: TokenSequence<T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> Result<TokenSequence<T>> {
    let mut cursor = sequence.cursor(0)?;

    while cursor.find_next(&sequence, &mut predicate, None)? {
        cursor.next(&sequence)?;
        cursor.remove(&mut sequence)?;
    }

    Ok(sequence)
}

/// Fail with malformed text unless every token satisfies `predicate`
pub fn ensure_all_match<T, P>(
    predicate: P,
    reason: impl Into<String>,
) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    T: Token,
    P: Fn(&T) -> bool + Send + Sync,
{
    gate(reason.into(), move |sequence: &TokenSequence<T>| {
        sequence.iter().all(&predicate)
    })
}

/// Fail with malformed text unless at least one token satisfies `predicate`
pub fn ensure_any_match<T, P>(
    predicate: P,
    reason: impl Into<String>,
) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    T: Token,
    P: Fn(&T) -> bool + Send + Sync,
{
    gate(reason.into(), move |sequence: &TokenSequence<T>| {
        sequence.iter().any(&predicate)
    })
}

/// Fail with malformed text if any token satisfies `predicate`
pub fn ensure_none_match<T, P>(
    predicate: P,
    reason: impl Into<String>,
) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    T: Token,
    P: Fn(&T) -> bool + Send + Sync,
{
    gate(reason.into(), move |sequence: &TokenSequence<T>| {
        !sequence.iter().any(&predicate)
    })
}

fn gate<T, C>(reason: String, check: C) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    T: Token,
    C: Fn(&TokenSequence<T>) -> bool + Send + Sync,
{
    from_fn(move |sequence: TokenSequence<T>| {
        if check(&sequence) {
            Ok(sequence)
        } else {
            let text = sequence.text().into_owned();
            debug!("validation rejected {text:?}: {reason}");
            Err(Error::malformed(text, reason.clone()))
        }
    })
}

/// Apply `action` to every token
pub fn for_each<T, A>(action: A) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    A: Fn(&mut T) + Send + Sync,
{
    from_fn(move |sequence| visit_each(sequence, &action))
}

/// Apply `then` to tokens satisfying `predicate` and `otherwise` to the rest
pub fn conditional<T, P, A, B>(
    predicate: P,
    then: A,
    otherwise: B,
) -> impl Processor<TokenSequence<T>, TokenSequence<T>>
where
    P: Fn(&T) -> bool + Send + Sync,
    A: Fn(&mut T) + Send + Sync,
    B: Fn(&mut T) + Send + Sync,
{
    from_fn(move |sequence| {
        visit_each(sequence, |token: &mut T| {
            if predicate(token) {
                then(token)
            } else {
                otherwise(token)
            }
        })
    })
}

fn visit_each<T>(
    mut sequence: TokenSequence<T>,
    action: impl Fn(&mut T),
) -> Result<TokenSequence<T>> {
    let mut cursor = sequence.cursor(0)?;

    while cursor.has_next(&sequence)? {
        cursor.next(&sequence)?;
        action(cursor.current_mut(&mut sequence)?);
    }

    Ok(sequence)
}
