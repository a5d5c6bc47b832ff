use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_chain_core::model::chain::Chain;
use rs_chain_core::model::graph_builder::{EdgeDirection, GraphBuilder};
use rs_chain_core::model::walk::generate_walk;
use rs_chain_core::token::tokenize;

const SAMPLE: &str = "It was the best of times, it was the worst of times, \
	it was the age of wisdom, it was the age of foolishness (Dickens, 1859).";

fn build(source: &str) -> Chain {
	GraphBuilder::from_stream(&tokenize(source), EdgeDirection::Forward)
		.unwrap()
		.freeze()
}

fn texts<'a>(chain: &'a Chain, start: &str, length: usize, seed: u64) -> Vec<&'a str> {
	let start = chain.token(start).unwrap();
	let mut rng = StdRng::seed_from_u64(seed);
	generate_walk(chain, start, length, &mut rng)
		.unwrap()
		.into_iter()
		.map(|id| chain.text(id).unwrap())
		.collect()
}

#[test]
fn alternating_pair() {
	let chain = build("A B A B A B");
	assert_eq!(chain.node_count(), 2);

	for (from, to) in [("A", "B"), ("B", "A")] {
		let node = chain.node(chain.token(from).unwrap()).unwrap();
		assert_eq!(node.len(), 1);
		let bucket = node.buckets()[0];
		assert_eq!(bucket.lower(), 0.0);
		assert!(bucket.upper() >= 1.0);
		assert_eq!(bucket.neighbour(), chain.token(to).unwrap());
	}

	for seed in 0..10 {
		assert_eq!(texts(&chain, "A", 4, seed), vec!["A", "B", "A", "B"]);
	}
}

#[test]
fn repeated_word_is_one_node() {
	let chain = build("the cat sat on the mat");
	assert_eq!(chain.node_count(), 5);

	let the = chain.node(chain.token("the").unwrap()).unwrap();
	assert_eq!(the.len(), 2);
	let targets: Vec<&str> = the
		.buckets()
		.iter()
		.map(|bucket| chain.text(bucket.neighbour()).unwrap())
		.collect();
	assert!(targets.contains(&"cat"));
	assert!(targets.contains(&"mat"));
	for bucket in the.buckets() {
		assert_relative_eq!(bucket.width(), 0.5, epsilon = 1e-9);
	}
}

#[test]
fn node_count_matches_distinct_endpoints() {
	let stream = tokenize(SAMPLE);
	let mut distinct: Vec<String> = stream.iter().map(|token| token.to_string()).collect();
	distinct.sort();
	distinct.dedup();

	let chain = build(SAMPLE);
	assert_eq!(chain.node_count(), distinct.len());
	for text in &distinct {
		assert!(chain.token(text).is_some(), "{} missing", text);
	}
}

#[test]
fn short_inputs_have_no_nodes() {
	for source in ["", "   ", "single"] {
		let chain = build(source);
		assert_eq!(chain.node_count(), 0);
		assert!(chain.keys().is_empty());
	}
}

#[test]
fn every_node_covers_the_unit_interval() {
	let chain = build(SAMPLE);
	for (_, node) in chain.nodes() {
		let buckets = node.buckets();
		assert!(!buckets.is_empty());
		assert_eq!(buckets[0].lower(), 0.0);
		assert!(buckets[buckets.len() - 1].upper() >= 1.0);

		let sum: f64 = buckets.iter().map(|bucket| bucket.width()).sum();
		assert_relative_eq!(sum, 1.0, epsilon = 1e-5);

		for pair in buckets.windows(2) {
			assert!(pair[0].lower() < pair[1].lower());
			assert_eq!(pair[0].upper(), pair[1].lower());
		}
	}
}

#[test]
fn walks_are_reproducible_for_a_seed() {
	let chain = build(SAMPLE);
	let first = texts(&chain, "it", 40, 1234);
	let second = texts(&chain, "it", 40, 1234);
	assert_eq!(first, second);
}

#[test]
fn walks_always_reach_the_requested_length() {
	// The final "." is a dead end
	let chain = build(SAMPLE);
	let dead_end = chain.token(".").unwrap();
	assert!(!chain.is_transitionable(dead_end));

	for length in [1, 2, 17, 200] {
		let walk = texts(&chain, "It", length, length as u64);
		assert_eq!(walk.len(), length);
		assert_eq!(walk[0], "It");
	}
	let walk = texts(&chain, ".", 30, 8);
	assert_eq!(walk.len(), 30);
}

#[test]
fn walks_follow_recorded_edges() {
	let chain = build(SAMPLE);
	let walk = texts(&chain, "was", 100, 77);
	for pair in walk.windows(2) {
		let from = chain.token(pair[0]).unwrap();
		let to = chain.token(pair[1]).unwrap();
		match chain.node(from) {
			Some(node) => assert!(node.buckets().iter().any(|bucket| bucket.neighbour() == to)),
			None => assert!(chain.is_transitionable(to)),
		}
	}
}

#[test]
fn reverse_direction_walks_backwards() {
	let chain = GraphBuilder::from_stream(&tokenize("one two three"), EdgeDirection::Reverse)
		.unwrap()
		.freeze();
	assert_eq!(texts(&chain, "three", 3, 0), vec!["three", "two", "one"]);
}
