#![allow(dead_code)]
// Shared by the benches: a small lexicon, so no wordfile is needed.
pub const WORDS: &[&str] = &[
    "ab", "abs", "ace", "act", "ad", "ado", "aft", "age", "ago", "ah", "aid", "ail", "aim", "air",
    "ale", "all", "an", "and", "ant", "ape", "apt", "arc", "are", "arm", "art", "as", "ash",
    "at", "ate", "bad", "bag", "ban", "bar", "bat", "be", "bead", "bear", "beat", "bed", "bet",
    "bid", "bird", "bit", "boa", "boat", "bore", "bread", "break", "cab", "cad", "can", "cane",
    "car", "care", "cart", "cast", "cat", "cats", "coat", "cod", "code", "core", "cot", "dab",
    "dare", "dart", "date", "do", "doe", "dot", "dote", "ear", "earn", "east", "eat", "eats",
    "eta", "go", "goat", "got", "grate", "great", "la", "lace", "last", "late", "no", "nod",
    "not", "note", "oat", "oats", "ode", "on", "one", "or", "ore", "rat", "rate", "read",
    "reds", "rest", "road", "roast", "rod", "rode", "rot", "sat", "scat", "sea", "seat", "set",
    "so", "sod", "sore", "sort", "star", "stare", "tab", "tabs", "tar", "tea", "tear", "to",
    "toad", "toe", "ton", "tone", "trace", "trade", "tread", "zax",
];

pub const BOARD: &[&str] = &["cat..", "a.o..", "bread"];
