use bkit::blocks::elements::ELEMENT_KINDS;

/// Prints every element type with the containers that accept it.
pub fn list_kinds() {
    println!("{:<18} {:<40}", "Type", "Containers");
    println!("{:-<58}", "");

    for kind in ELEMENT_KINDS {
        println!("{:<18} {:<40}", kind.name, kind.containers);
    }
}
