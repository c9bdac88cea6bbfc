//! Walkthrough of the heap operations with colored console output.
//!
//! Each scenario prints the heap's forest after every step, so the effect of
//! inserts, deletions, decreases, and unions on the tree shapes is visible.
//!
//! Run with `cargo run --example heap_demo`.

use fibonacci_heap::{FibonacciHeap, MergeableHeap};
use rand::seq::SliceRandom;
use rand::Rng;

mod logger {
    use colored::*;

    pub fn header(message: &str) {
        let banner = format!("* {} *", message.to_uppercase());
        println!("{}", banner.bright_green().bold());
    }

    pub fn details(message: &str) {
        println!("\n");
        println!("{}", format!("> {}", message).blue().bold());
    }

    pub fn title(message: &str) {
        println!("{}", message.cyan().underline());
    }

    pub fn debug(message: &str) {
        println!("{}", message.purple().bold());
    }

    pub fn warning(message: &str) {
        println!("{}", message.yellow().bold());
    }

    pub fn divider() {
        let line = "-----------------------------------------";
        println!("\n{}", line.bright_green().bold());
    }
}

fn main() {
    test_union();
    test_delete_min();
    test_insert();
    test_decrease_key();
    test_delete();
}

fn generate_random_heap(element_count: usize) -> FibonacciHeap<i32> {
    let mut rng = rand::thread_rng();
    let mut heap = FibonacciHeap::new();
    for _ in 0..element_count {
        heap.insert(rng.gen_range(0..100));
    }
    heap
}

fn show(heap: &FibonacciHeap<i32>) {
    if heap.is_empty() {
        logger::warning("Heap is empty!");
        return;
    }
    let rendered = heap.display().to_string();
    let mut lines = rendered.lines();
    if let Some(summary) = lines.next() {
        logger::title(summary);
    }
    for line in lines {
        logger::debug(line);
    }
}

fn test_insert() {
    let mut heap = FibonacciHeap::new();
    let numbers = [5, 2, 3, 4, 1, 6, 11, 0, 9, 10];

    logger::header("Insert test");
    logger::details("Initial heap");
    show(&heap);
    for number in numbers {
        logger::details(&format!("Inserting: {}", number));
        heap.insert(number);
        show(&heap);
    }
    logger::divider();
}

fn test_delete_min() {
    let count = 10;
    let mut heap = generate_random_heap(count);

    logger::header("DeleteMin test");
    for _ in 0..=count {
        let minimum = heap
            .peek()
            .map_or_else(|| "-".to_string(), |m| m.to_string());
        logger::details(&format!("Minimum: {}", minimum));
        show(&heap);
        heap.delete_min();
    }
    logger::divider();
}

fn test_decrease_key() {
    let mut heap = FibonacciHeap::new();
    let mut nodes = heap.insert_all(vec![5, 2, 3, 4, 1, 1, 10, 9, 8, 7, 6]);

    let min_node = heap.minimum().expect("heap is not empty");
    heap.delete_min();
    nodes.retain(|node| *node != min_node);

    logger::header("DecreaseKey test");
    show(&heap);
    for node in &nodes {
        let element = *heap.get(node).expect("node is live");
        logger::details(&format!("Decreasing key {} to {}", element, element - 1));
        heap.decrease_key(node, element - 1)
            .expect("decrease is valid");
        show(&heap);
    }
    logger::divider();
}

fn test_union() {
    let mut heap1 = generate_random_heap(10);
    let heap2 = generate_random_heap(5);

    logger::divider();
    logger::header("Union test");
    logger::details("Heap 1");
    show(&heap1);

    logger::details("Heap 2");
    show(&heap2);

    logger::details("Union heap");
    heap1.union(heap2);
    show(&heap1);
    logger::divider();
}

fn test_delete() {
    let mut heap = FibonacciHeap::new();
    let mut nodes = heap.insert_all(vec![5, 2, 3, 4, 1, 1, 10, 9, 8, 7, 6]);

    let min_node = heap.minimum().expect("heap is not empty");
    heap.delete_min();
    nodes.retain(|node| *node != min_node);
    nodes.shuffle(&mut rand::thread_rng());

    logger::header("Delete test");
    logger::details("Initial heap");
    show(&heap);

    for node in &nodes {
        let element = *heap.get(node).expect("node is live");
        logger::details(&format!("Deleting {}", element));
        heap.delete(node).expect("node is live");
        show(&heap);
    }
    logger::divider();
}
