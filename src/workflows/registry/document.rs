use roxmltree::{Document, Node, ParsingOptions};

/// Parses the registry text. The published registry declares a DOCTYPE, so DTDs are allowed.
pub(crate) fn parse_document(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options)
}

/// Follows a slash-separated path of direct child elements.
pub(crate) fn find_path<'a, 'input>(
    node: Node<'a, 'input>,
    path: &str,
) -> Option<Node<'a, 'input>> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .try_fold(node, |current, tag| {
            current
                .children()
                .find(|child| child.is_element() && child.has_tag_name(tag))
        })
}

/// Text at `path`, or `None` when a node along the way or its text is absent.
pub(crate) fn optional_text(node: Node<'_, '_>, path: &str) -> Option<String> {
    find_path(node, path)
        .and_then(|leaf| leaf.text())
        .map(str::to_owned)
}

/// Element descendants named `tag` in document order, excluding `node` itself.
pub(crate) fn descendants_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |child| child.is_element() && child.has_tag_name(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "<DOCUMENT><MDB><ID>1</ID><NAMEN><NAME><NACHNAME>Abel</NACHNAME><ADEL/></NAME></NAMEN></MDB></DOCUMENT>";

    #[test]
    fn optional_text_walks_child_paths() {
        let document = parse_document(SAMPLE).expect("parses");
        let mdb = document
            .root_element()
            .first_element_child()
            .expect("mdb present");

        assert_eq!(optional_text(mdb, "ID").as_deref(), Some("1"));
        assert_eq!(
            optional_text(mdb, "NAMEN/NAME/NACHNAME").as_deref(),
            Some("Abel")
        );
    }

    #[test]
    fn optional_text_is_none_for_missing_or_empty_nodes() {
        let document = parse_document(SAMPLE).expect("parses");
        let mdb = document
            .root_element()
            .first_element_child()
            .expect("mdb present");

        assert!(optional_text(mdb, "NAMEN/NAME/ADEL").is_none());
        assert!(optional_text(mdb, "NAMEN/NAME/VORNAME").is_none());
        assert!(optional_text(mdb, "BIOGRAFISCHE_ANGABEN/BERUF").is_none());
    }

    #[test]
    fn descendants_named_skips_the_starting_node() {
        let document = parse_document("<MDB><X><MDB/></X><MDB/></MDB>").expect("parses");
        let root = document.root_element();
        assert_eq!(descendants_named(root, "MDB").count(), 2);
    }

    #[test]
    fn doctype_declaration_is_accepted() {
        let text = "<?xml version=\"1.0\"?>\n<!DOCTYPE DOCUMENT SYSTEM \"MDB_STAMMDATEN.DTD\">\n<DOCUMENT/>";
        assert!(parse_document(text).is_ok());
    }

    #[test]
    fn malformed_text_fails_to_parse() {
        assert!(parse_document("<DOCUMENT><MDB></DOCUMENT>").is_err());
    }
}
