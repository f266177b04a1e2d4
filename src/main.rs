use rangesum::RangeError;
use rangesum::SegmentTree;

fn main() -> Result<(), RangeError> {
    env_logger::init();

    let mut tree = SegmentTree::new(&[2, 8, 6, 7, -2, -8, 4, 9]);
    println!("{:?}", tree);

    println!("Sum from index 1 to 3: {}", tree.query(1, 3)?);
    tree.update(2, 10)?;
    println!("Sum after updating index 2 to 10: {}", tree.query(1, 3)?);
    println!("Total after update: {}", tree.total());

    println!("cover of [1, 6]: {:?}", tree.cover(1, 6)?);
    println!("depth: {}", tree.depth());

    return Ok(());
}
