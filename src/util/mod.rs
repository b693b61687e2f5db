use crate::models::{ListItem, Title};

/// A title is done once it has at least one item and every item is checked.
/// Zero items counts as ongoing.
pub(crate) fn all_items_done(items: &[ListItem]) -> bool {
    !items.is_empty() && items.iter().all(|i| i.status)
}

/// Split titles into (ongoing, done) columns, preserving backend order
/// within each column.
pub(crate) fn partition_titles(pairs: Vec<(Title, Vec<ListItem>)>) -> (Vec<Title>, Vec<Title>) {
    let mut ongoing = Vec::new();
    let mut done = Vec::new();

    for (title, items) in pairs {
        if all_items_done(&items) {
            done.push(title);
        } else {
            ongoing.push(title);
        }
    }

    (ongoing, done)
}

/// Drop drafts that are empty or whitespace-only. Kept drafts are sent
/// verbatim, untrimmed.
pub(crate) fn non_blank_descs(drafts: &[String]) -> Vec<String> {
    drafts
        .iter()
        .filter(|d| !d.trim().is_empty())
        .cloned()
        .collect()
}

/// How to persist one staged row from the item editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ItemSaveOp {
    /// Row already exists on the backend; rewrite its text.
    Update { list_id: i64, desc: String },
    /// Row was added in the editor; create it.
    Add { desc: String },
}

/// One op per staged row, in row order.
pub(crate) fn plan_item_saves(staged: &[ListItem]) -> Vec<ItemSaveOp> {
    staged
        .iter()
        .map(|item| match item.id {
            Some(list_id) => ItemSaveOp::Update {
                list_id,
                desc: item.list_desc.clone(),
            },
            None => ItemSaveOp::Add {
                desc: item.list_desc.clone(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(id: i64, text: &str) -> Title {
        Title {
            id,
            title: text.to_string(),
        }
    }

    fn item(id: Option<i64>, desc: &str, status: bool) -> ListItem {
        ListItem {
            id,
            list_desc: desc.to_string(),
            status,
        }
    }

    #[test]
    fn test_title_with_no_items_is_ongoing() {
        assert!(!all_items_done(&[]));
    }

    #[test]
    fn test_title_with_unchecked_item_is_ongoing() {
        let items = vec![item(Some(1), "Sweep", true), item(Some(2), "Mop", false)];
        assert!(!all_items_done(&items));
    }

    #[test]
    fn test_title_with_all_items_checked_is_done() {
        let items = vec![item(Some(1), "Sweep", true), item(Some(2), "Mop", true)];
        assert!(all_items_done(&items));
    }

    #[test]
    fn test_partition_preserves_backend_order() {
        let pairs = vec![
            (title(1, "A"), vec![item(Some(10), "a", true)]),
            (title(2, "B"), vec![item(Some(20), "b", false)]),
            (title(3, "C"), vec![]),
            (title(4, "D"), vec![item(Some(40), "d", true)]),
        ];

        let (ongoing, done) = partition_titles(pairs);

        let ongoing_ids: Vec<i64> = ongoing.iter().map(|t| t.id).collect();
        let done_ids: Vec<i64> = done.iter().map(|t| t.id).collect();
        assert_eq!(ongoing_ids, vec![2, 3]);
        assert_eq!(done_ids, vec![1, 4]);
    }

    #[test]
    fn test_partition_reclassifies_after_item_checked() {
        let before = vec![(title(1, "Chores"), vec![item(Some(10), "Sweep", false)])];
        let (ongoing, done) = partition_titles(before);
        assert_eq!(ongoing.len(), 1);
        assert!(done.is_empty());

        let after = vec![(title(1, "Chores"), vec![item(Some(10), "Sweep", true)])];
        let (ongoing, done) = partition_titles(after);
        assert!(ongoing.is_empty());
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].title, "Chores");
    }

    #[test]
    fn test_non_blank_descs_filters_whitespace_only() {
        let drafts = vec!["Buy milk".to_string(), String::new(), "  ".to_string()];
        assert_eq!(non_blank_descs(&drafts), vec!["Buy milk".to_string()]);
    }

    #[test]
    fn test_non_blank_descs_keeps_drafts_untrimmed() {
        let drafts = vec![" Buy milk ".to_string()];
        assert_eq!(non_blank_descs(&drafts), vec![" Buy milk ".to_string()]);
    }

    #[test]
    fn test_plan_item_saves_updates_existing_and_adds_new() {
        let staged = vec![item(Some(5), "A", false), item(None, "B", false)];

        let ops = plan_item_saves(&staged);

        assert_eq!(
            ops,
            vec![
                ItemSaveOp::Update {
                    list_id: 5,
                    desc: "A".to_string(),
                },
                ItemSaveOp::Add {
                    desc: "B".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_plan_item_saves_empty_stage_is_noop() {
        assert!(plan_item_saves(&[]).is_empty());
    }
}
