use crate::models::Item;

/// Built-in FAQ shown when no items file is configured.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(
            1,
            "What is faqview?",
            "A terminal viewer for question/answer lists. Only one answer is open at a time.",
        ),
        Item::new(
            2,
            "How do I open an answer?",
            "Move the cursor with j/k or the arrow keys and press Enter or Space.",
        ),
        Item::new(
            3,
            "How do I close it again?",
            "Press Enter on the same question, or Esc to collapse whatever is open.",
        ),
        Item::new(
            4,
            "Where do the questions come from?",
            "From YAML or JSON files passed with --items, or from items_path in the config file.",
        ),
        Item::new(
            5,
            "Can I print the list instead?",
            "Yes. `faqview show --expand 2` prints the list with item 2 expanded.",
        ),
    ]
}
