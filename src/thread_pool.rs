use std::{
    sync::{
        mpsc::{channel, Receiver},
        Arc, Mutex,
    },
    thread::spawn,
};

/// Runs `process_fn` over `inputs` on worker threads.
///
/// Outputs come back as they complete, each tagged with the position of its input.
pub struct ThreadPool<Output> {
    output_receiver: Receiver<(usize, Output)>,
}

impl<Output> ThreadPool<Output>
where
    Output: 'static + Send,
{
    pub fn new<Input: 'static + Send>(
        threads: usize,
        process_fn: impl Fn(Input) -> Output + 'static + Sync + Send,
        inputs: impl Iterator<Item = Input>,
    ) -> Self {
        let (input_sender, input_receiver) = channel::<(usize, Input)>();
        let input_receiver = Arc::new(Mutex::new(input_receiver));
        let (output_sender, output_receiver) = channel();

        let process_fn = Arc::new(process_fn);
        for _ in 0..threads.max(1) {
            let input_receiver = input_receiver.clone();
            let output_sender = output_sender.clone();
            let process_fn = process_fn.clone();
            spawn(move || loop {
                // a poisoned lock means another worker panicked
                let job = match input_receiver.lock() {
                    Ok(receiver) => receiver.recv(),
                    Err(_) => break,
                };
                let (index, input) = match job {
                    Ok(job) => job,
                    Err(_) => break,
                };
                if output_sender.send((index, process_fn(input))).is_err() {
                    break;
                }
            });
        }
        for job in inputs.enumerate() {
            if input_sender.send(job).is_err() {
                break;
            }
        }
        Self { output_receiver }
    }
}

impl<Output> Iterator for ThreadPool<Output> {
    type Item = (usize, Output);

    fn next(&mut self) -> Option<Self::Item> {
        self.output_receiver.recv().ok()
    }
}
