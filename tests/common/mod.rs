use std::collections::VecDeque;

use steque::Steque;

/// A single steque operation, used to replay scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Push(i32),
    Pop,
    Enqueue(i32),
}

/// Applies `ops` to a fresh steque and returns it
/// Pops on an empty steque are ignored
#[allow(dead_code)]
pub fn replay(ops: &[Op]) -> Steque<i32> {
    let mut steque = Steque::new();
    for op in ops {
        match *op {
            Op::Push(item) => steque.push(item),
            Op::Pop => {
                let _ = steque.pop();
            }
            Op::Enqueue(item) => steque.enqueue(item),
        }
    }
    steque
}

/// Applies `ops` to a `VecDeque` with the same front/back meaning as the steque
#[allow(dead_code)]
pub fn replay_model(ops: &[Op]) -> VecDeque<i32> {
    let mut model = VecDeque::new();
    for op in ops {
        match *op {
            Op::Push(item) => model.push_front(item),
            Op::Pop => {
                model.pop_front();
            }
            Op::Enqueue(item) => model.push_back(item),
        }
    }
    model
}

/// Collects the steque's elements front to back
#[allow(dead_code)]
pub fn contents(steque: &Steque<i32>) -> Vec<i32> {
    steque.iter().copied().collect()
}
