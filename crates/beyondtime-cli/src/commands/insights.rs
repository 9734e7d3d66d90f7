use beyondtime_core::insights::insights;

use super::{print_json, CmdResult};

pub fn run(json: bool) -> CmdResult {
    let cards = insights();
    if json {
        return print_json(&cards);
    }
    for card in cards {
        println!("{}\n  {}\n", card.title, card.description);
    }
    Ok(())
}
