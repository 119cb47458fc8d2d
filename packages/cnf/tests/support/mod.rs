#![allow(dead_code)]

use cnf::grammar::{
    ChomskyNormalFormGrammar, CnfWord, ContextFreeGrammar, Grammar, GrammarBuilder, NonTerminal,
    ProductionSymbol,
};
use indexmap::{IndexMap, IndexSet};

/// Builds a grammar from `(lhs, alternatives)` pairs; `ε` marks an empty
/// alternative.
pub fn grammar(
    start: &str,
    non_terminals: &[&str],
    terminals: &[&str],
    rules: &[(&str, &[&[&str]])],
) -> ContextFreeGrammar {
    let mut builder = GrammarBuilder::new(start)
        .non_terminals(non_terminals.iter().copied())
        .terminals(terminals.iter().copied());

    for &(lhs, alternatives) in rules {
        for &rhs in alternatives {
            builder = builder.production(lhs, rhs);
        }
    }

    builder.build().unwrap()
}

pub type NamedProductions = IndexMap<String, IndexSet<Vec<String>>>;

pub fn named_productions<R, G>(grammar: &G) -> NamedProductions
where
    R: cnf::grammar::ProductionWord,
    G: Grammar<R>,
{
    let mut productions = NamedProductions::new();

    for (lhs, word) in grammar.rules() {
        productions
            .entry(lhs.to_string())
            .or_default()
            .insert(word.iter().map(|symbol| symbol.as_str().to_owned()).collect());
    }

    productions
}

pub fn expected(rules: &[(&str, &[&[&str]])]) -> NamedProductions {
    rules
        .iter()
        .map(|&(lhs, alternatives)| {
            (
                lhs.to_owned(),
                alternatives
                    .iter()
                    .map(|rhs| rhs.iter().map(|&s| s.to_owned()).collect())
                    .collect(),
            )
        })
        .collect()
}

/// Every production is `A → B C`, `A → a`, or `S → ε` for the start symbol.
pub fn is_in_normal_form(grammar: &ContextFreeGrammar) -> bool {
    grammar.rules().iter().all(|(lhs, word)| match word.symbols() {
        [] => lhs == grammar.start_symbol(),
        [symbol] => symbol.is_terminal(),
        [first, second] => !first.is_terminal() && !second.is_terminal(),
        _ => false,
    })
}

/// All words over `terminals` with at most `max_len` symbols, shortest first.
pub fn words_up_to<'a>(terminals: &[&'a str], max_len: usize) -> Vec<Vec<&'a str>> {
    let mut words = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];

    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|word: &Vec<&'a str>| {
                terminals.iter().map(move |&t| {
                    let mut next = word.clone();
                    next.push(t);
                    next
                })
            })
            .collect();
        words.extend(frontier.iter().cloned());
    }

    words
}

/// Membership for an arbitrary context-free grammar, ε and unit cycles
/// included. Fills a chart of `(A, i, j)` facts, meaning `A` derives
/// `word[i..j]`, until nothing new can be added.
pub fn derives(grammar: &ContextFreeGrammar, word: &[&str]) -> bool {
    let n = word.len();
    let mut chart: IndexSet<(NonTerminal, usize, usize)> = IndexSet::new();

    loop {
        let mut changed = false;

        for (lhs, rhs) in grammar.productions() {
            for i in 0..=n {
                for j in i..=n {
                    if chart.contains(&(lhs.clone(), i, j)) {
                        continue;
                    }

                    if rhs
                        .iter()
                        .any(|alternative| spans(alternative.symbols(), i, j, word, &chart))
                    {
                        chart.insert((lhs.clone(), i, j));
                        changed = true;
                    }
                }
            }
        }

        if !changed {
            break;
        }
    }

    chart.contains(&(grammar.start_symbol().clone(), 0, n))
}

fn spans(
    symbols: &[ProductionSymbol],
    i: usize,
    j: usize,
    word: &[&str],
    chart: &IndexSet<(NonTerminal, usize, usize)>,
) -> bool {
    match symbols.split_first() {
        None => i == j,
        Some((first, rest)) => (i..=j).any(|m| {
            let first_matches = match first {
                ProductionSymbol::Terminal(t) => m == i + 1 && word[i] == t.as_str(),
                ProductionSymbol::NonTerminal(nt) => chart.contains(&(nt.clone(), i, m)),
            };

            first_matches && spans(rest, m, j, word, chart)
        }),
    }
}

/// Cocke–Younger–Kasami membership for a grammar in normal form.
pub fn cyk(grammar: &ChomskyNormalFormGrammar, word: &[&str]) -> bool {
    let n = word.len();
    if n == 0 {
        return grammar.is_start_symbol_erasable();
    }

    let mut table = vec![vec![IndexSet::<&NonTerminal>::new(); n]; n];

    for (lhs, rhs) in grammar.productions() {
        for cnf_word in rhs {
            if let CnfWord::Terminal(t) = cnf_word {
                for (i, terminal) in word.iter().enumerate() {
                    if *terminal == t.as_str() {
                        table[i][i].insert(lhs);
                    }
                }
            }
        }
    }

    for d in 0..n - 1 {
        for i in 0..n - d - 1 {
            let j = i + d + 1;

            for k in i..j {
                for (lhs, rhs) in grammar.productions() {
                    for cnf_word in rhs {
                        if let CnfWord::NonTerminals(nt1, nt2) = cnf_word {
                            if table[i][k].contains(nt1) && table[k + 1][j].contains(nt2) {
                                table[i][j].insert(lhs);
                            }
                        }
                    }
                }
            }
        }
    }

    table[0][n - 1].contains(grammar.start_symbol())
}

/// Panics with the first word on which the two grammars disagree.
pub fn assert_same_language(
    original: &ContextFreeGrammar,
    cnf: &ChomskyNormalFormGrammar,
    max_len: usize,
) {
    let terminals = original
        .terminals()
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>();

    for word in words_up_to(&terminals, max_len) {
        assert_eq!(
            derives(original, &word),
            cyk(cnf, &word),
            "grammars disagree on {:?}\n{}",
            word,
            cnf.listing()
        );
    }
}
