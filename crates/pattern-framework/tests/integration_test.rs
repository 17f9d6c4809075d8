use pattern_framework::{
    required, walk, BoxError, Build, Command, Component, Composite, Decorate, Director,
    FrameworkError, Increment, Invoker, Leaf, PrototypeRegistry, Singleton,
};
use std::collections::BTreeMap;

// --- Test Receiver ---

#[derive(Clone, Debug, Default, PartialEq)]
struct Counter {
    value: i64,
    log: Vec<String>,
}

#[derive(Debug)]
struct Add(i64);

impl Command<Counter> for Add {
    fn name(&self) -> &str {
        "add"
    }

    fn execute(&mut self, counter: &mut Counter) -> Result<(), BoxError> {
        counter.value += self.0;
        counter.log.push(format!("+{}", self.0));
        Ok(())
    }

    fn undo(&mut self, counter: &mut Counter) -> Result<(), BoxError> {
        counter.value -= self.0;
        counter.log.pop();
        Ok(())
    }
}

// --- Tests ---

#[tokio::test]
async fn test_invoker_full_lifecycle() {
    let (invoker, client) = Invoker::new(Counter::default(), 8);
    let handle = tokio::spawn(invoker.run());

    // 1. Concurrent clients are serialized by the invoker
    let mut tasks = Vec::new();
    for _ in 0..10 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move { client.execute(Add(1)).await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }
    assert_eq!(client.snapshot().await.unwrap().value, 10);
    assert_eq!(client.history().await.unwrap().len(), 10);

    // 2. Undo walks back one command at a time
    client.undo().await.unwrap();
    client.undo().await.unwrap();
    let counter = client.snapshot().await.unwrap();
    assert_eq!(counter.value, 8);
    assert_eq!(counter.log.len(), 8);

    // 3. Shutdown hands back the final state
    drop(client);
    let final_state = handle.await.unwrap();
    assert_eq!(final_state.value, 8);
}

#[tokio::test]
async fn test_invoker_undo_on_empty_history() {
    let (invoker, client) = Invoker::new(Counter::default(), 8);
    tokio::spawn(invoker.run());

    let result = client.undo().await;
    assert!(matches!(result, Err(FrameworkError::NothingToUndo)));
    assert_eq!(client.snapshot().await.unwrap(), Counter::default());
}

#[test]
fn test_decorated_items_inside_composite() {
    let order = Composite::new("order")
        .with(Leaf::new("coffee", 10u32).decorate(Increment::new("milk", 2)))
        .with(Composite::new("pastries").with(Leaf::new("croissant", 6u32)));

    assert_eq!(order.operation(), 18);

    // A decorated item is one node, named after its outermost layer.
    let mut names = Vec::new();
    walk(&order, &mut |depth, node| names.push(format!("{depth}:{}", node.name())));
    assert_eq!(names, vec!["0:order", "1:milk", "1:pastries", "2:croissant"]);
}

#[derive(Debug, Clone, PartialEq)]
struct Room {
    name: String,
    fixtures: BTreeMap<String, u32>,
}

#[derive(Default)]
struct RoomBuilder {
    name: Option<String>,
    fixtures: BTreeMap<String, u32>,
}

impl Build for RoomBuilder {
    type Product = Room;

    fn finish(self) -> Result<Room, FrameworkError> {
        Ok(Room {
            name: required(self.name, "name")?,
            fixtures: self.fixtures,
        })
    }
}

#[test]
fn test_built_product_as_prototype() {
    let director = Director::new("bedroom")
        .step("name", |b: &mut RoomBuilder| b.name = Some("bedroom".to_string()))
        .step("lights", |b: &mut RoomBuilder| {
            b.fixtures.insert("light".to_string(), 2);
        });

    let room = director.construct(RoomBuilder::default()).unwrap();

    let mut registry = PrototypeRegistry::new();
    registry.register("bedroom", room.clone());

    let mut guest_room = registry.spawn("bedroom").unwrap();
    guest_room.name = "guest room".to_string();
    guest_room.fixtures.insert("light".to_string(), 1);

    assert_eq!(registry.spawn("bedroom").unwrap(), room);
    assert!(matches!(
        registry.spawn("attic"),
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_singleton_shared_across_tasks() {
    static CONFIG: Singleton<Vec<String>> = Singleton::new();

    let mut tasks = Vec::new();
    for _ in 0..8 {
        tasks.push(tokio::spawn(async {
            let config = CONFIG.get_or_init(|| vec!["debug".to_string()]);
            config as *const Vec<String> as usize
        }));
    }

    let mut addresses = Vec::new();
    for task in tasks {
        addresses.push(task.await.unwrap());
    }

    assert_eq!(CONFIG.constructions(), 1);
    addresses.dedup();
    assert_eq!(addresses.len(), 1);
}
