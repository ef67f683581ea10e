use anyhow::Context;
use clap::Parser;

use word_trie::dict::read_dictionary;
use word_trie::Trie;

/// Builds a word-count trie from a dictionary file and reports how many
/// times each query word occurs in it.
#[derive(Parser)]
struct Cli {
    /// Newline-delimited word list, one lowercase word per line
    #[arg(default_value = "dictionary.txt")]
    dictionary: String,

    /// Words to look up once the trie is built
    #[arg(
        long = "query",
        num_args = 1..,
        default_values = ["notaword", "ucf", "no", "note", "corg"]
    )]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let words = read_dictionary(&cli.dictionary).await?;
    for word in &words {
        println!("{}", word);
    }

    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word)
            .with_context(|| format!("Insert dictionary word {:?}", word))?;
    }
    eprintln!(
        "Inserted {} words ({} distinct) from {}",
        words.len(),
        trie.word_count(),
        cli.dictionary
    );

    for word in &cli.query {
        println!("\t{} : {}", word, trie.occurrences(word));
    }

    trie.deallocate();
    println!("Trie deallocated successfully.");

    Ok(())
}
