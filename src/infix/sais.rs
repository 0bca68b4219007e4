// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction.
//!
//! ```text
//! Input: "banana" + $
//!
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │   ($ = sentinel, smallest symbol)
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!       *       *           *     LMS = S-type preceded by L-type
//!
//! 1. Drop LMS suffixes at their bucket tails, induce L then S
//! 2. Name LMS substrings; recurse if any two share a name
//! 3. Drop LMS suffixes again in their now-known order, induce L then S
//!
//! Output: [6, 5, 3, 1, 0, 4, 2]
//! ```
//!
//! One routine handles both the byte level and the recursion: bytes are
//! shifted up by one so symbol 0 is free for the sentinel, and a reduced
//! string always ends in the sentinel's own name, which is 0 and unique.
//!
//! Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure
//! Induced-Sorting", <https://doi.org/10.1109/DCC.2009.42>

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    S,
    L,
}

const EMPTY: usize = usize::MAX;

/// Suffix array of `text`: `sa[i]` is the start of the i-th smallest suffix.
pub fn suffix_array(text: &[u8]) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut symbols: Vec<u32> = text.iter().map(|&b| u32::from(b) + 1).collect();
    symbols.push(0);

    sais(&symbols, 257)
        .into_iter()
        .filter(|&pos| pos < text.len())
        .collect()
}

/// `text` must end with a unique smallest symbol 0.
fn sais(text: &[u32], alphabet: usize) -> Vec<usize> {
    let n = text.len();
    if n <= 1 {
        return (0..n).collect();
    }

    let types = classify(text);
    let lms: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();
    let buckets = bucket_sizes(text, alphabet);
    let mut sa = vec![EMPTY; n];

    // Pass 1: LMS in text order. Sorts LMS *substrings*, not yet suffixes.
    induce(text, &types, &buckets, &lms, &mut sa);

    let mut names = vec![0u32; n];
    let mut name = 0u32;
    let mut prev: Option<usize> = None;
    for &pos in &sa {
        if !is_lms(&types, pos) {
            continue;
        }
        if let Some(p) = prev {
            if !lms_substrings_equal(text, &types, p, pos) {
                name += 1;
            }
        }
        names[pos] = name;
        prev = Some(pos);
    }

    let reduced: Vec<u32> = lms.iter().map(|&pos| names[pos]).collect();
    let order = if (name as usize) + 1 < lms.len() {
        sais(&reduced, name as usize + 1)
    } else {
        let mut order: Vec<usize> = (0..reduced.len()).collect();
        order.sort_unstable_by_key(|&i| reduced[i]);
        order
    };

    // Pass 2: LMS suffixes in their true order.
    let sorted_lms: Vec<usize> = order.into_iter().map(|i| lms[i]).collect();
    induce(text, &types, &buckets, &sorted_lms, &mut sa);
    sa
}

fn induce(text: &[u32], types: &[SuffixType], buckets: &[usize], lms: &[usize], sa: &mut [usize]) {
    sa.fill(EMPTY);

    let mut tails = bucket_tails(buckets);
    for &pos in lms.iter().rev() {
        let c = text[pos] as usize;
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = bucket_heads(buckets);
    for i in 0..sa.len() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::L {
            let c = text[j] as usize;
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = bucket_tails(buckets);
    for i in (0..sa.len()).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::S {
            let c = text[j] as usize;
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

fn classify(text: &[u32]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];
    for i in (0..n - 1).rev() {
        types[i] = match text[i].cmp(&text[i + 1]) {
            std::cmp::Ordering::Greater => SuffixType::L,
            std::cmp::Ordering::Less => SuffixType::S,
            std::cmp::Ordering::Equal => types[i + 1],
        };
    }
    types
}

#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && i < types.len() && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn bucket_sizes(text: &[u32], alphabet: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet];
    for &c in text {
        sizes[c as usize] += 1;
    }
    sizes
}

fn bucket_heads(sizes: &[usize]) -> Vec<usize> {
    sizes
        .iter()
        .scan(0, |sum, &size| {
            let head = *sum;
            *sum += size;
            Some(head)
        })
        .collect()
}

fn bucket_tails(sizes: &[usize]) -> Vec<usize> {
    sizes
        .iter()
        .scan(0, |sum, &size| {
            *sum += size;
            Some(*sum)
        })
        .collect()
}

/// Same symbols and types from `i` and `j` up to and including the next LMS.
fn lms_substrings_equal(text: &[u32], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }
    let n = text.len();
    for k in 0.. {
        let (pi, pj) = (i + k, j + k);
        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }
        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }
        if k > 0 {
            match (is_lms(types, pi), is_lms(types, pj)) {
                (true, true) => return true,
                (false, false) => {}
                _ => return false,
            }
        }
    }
    false
}
