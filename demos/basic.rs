//! Examples of using the prefix-tree set
use prefix_set::Trie;

fn main() {
    // Create a new trie and store some words
    let mut trie = Trie::new();
    trie.add("bat").add("batman").add("battery");

    // Exact lookups
    assert!(trie.find("bat", false));
    assert!(trie.find("batman", false));
    assert!(!trie.find("batma", false));

    // Prefix lookups
    assert!(trie.find("batt", true));
    assert!(!trie.find("cat", true));

    // Enumerate everything under a prefix, in lexicographic order
    let view = trie.view_prefix("bat");
    for word in &view {
        println!("{}", String::from_utf8_lossy(&word));
    }

    // Removing a word never disturbs the others, even ones sharing its path
    assert!(trie.remove("bat"));
    assert!(!trie.find("bat", false));
    assert!(trie.find("batman", false));
    assert!(trie.find("battery", false));

    // Removing the rest prunes the tree back down to the bare root
    trie.remove("batman");
    trie.remove("battery");
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);

    println!("all assertions passed");
}
