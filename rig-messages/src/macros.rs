/// Render a template from [`MESSAGES`](crate::MESSAGES).
///
/// ```
/// use rig_messages::{msg, MESSAGES};
///
/// let line = msg!(MESSAGES.demo.initial_pc, computer = "CPU: a, GPU: b, RAM: c");
/// assert_eq!(line, "Initial PC: CPU: a, GPU: b, RAM: c");
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr) => {
        $crate::builder::MessageBuilder::new($template).build()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut builder = $crate::builder::MessageBuilder::new($template);
            $(
                builder = builder.var(stringify!($key), $value);
            )+
            builder.build()
        }
    };
}
