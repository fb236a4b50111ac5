use arbor::prelude::*;
use arbor_trees::{Id3Tree, TreeNode};
use ndarray::array;

#[test]
fn play_tennis_tree() -> Result<()> {
    let dataset = arbor_datasets::play_tennis();
    let tree = Id3Tree::params().fit(&dataset)?;

    // Outlook, Temperature, Humidity, Wind; Temperature is never needed
    assert_eq!(tree.attributes(), vec![0, 2, 3]);
    assert_eq!(tree.num_leaves(), 5);
    assert_eq!(tree.max_depth(), 2);
    assert_eq!(
        tree.root_node().child(&"Overcast".to_string()),
        Some(&TreeNode::Leaf {
            prediction: "Yes".to_string()
        })
    );
    assert_eq!(tree.accuracy(&dataset), 1.0);

    Ok(())
}

#[test]
fn play_tennis_text() -> Result<()> {
    let dataset = arbor_datasets::play_tennis();
    let tree = Id3Tree::params().fit(&dataset)?;

    let expected = "\
|--- Outlook == Sunny
|   |--- Humidity == High
|   |   |--- class: No
|   |--- Humidity == Normal
|   |   |--- class: Yes
|--- Outlook == Overcast
|   |--- class: Yes
|--- Outlook == Rain
|   |--- Wind == Weak
|   |   |--- class: Yes
|   |--- Wind == Strong
|   |   |--- class: No
";

    assert_eq!(tree.export_to_text().to_string(), expected);

    Ok(())
}

#[test]
fn play_tennis_predictions() -> Result<()> {
    let dataset = arbor_datasets::play_tennis();
    let tree = Id3Tree::params().fit(&dataset)?;

    let records = array![
        ["Sunny", "Cool", "High", "Strong"],
        ["Overcast", "Hot", "High", "Weak"],
        ["Rain", "Mild", "Normal", "Weak"],
        ["Snow", "Mild", "Normal", "Weak"],
    ]
    .mapv(|x| x.to_string());

    let predictions = tree.predict(&records);
    assert_eq!(
        predictions,
        array![
            Some("No".to_string()),
            Some("Yes".to_string()),
            Some("Yes".to_string()),
            None
        ]
    );

    Ok(())
}
