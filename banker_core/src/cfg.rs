/// How a max-demand cell smaller than its allocation cell is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NeedPolicy {
    /// Reject the snapshot at construction time.
    #[default]
    Strict,
    /// Accept it. The resulting negative need passes every `need <= work`
    /// test, so the process is admissible in any pass.
    Permissive,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EvaluatorCfg {
    pub need_policy: NeedPolicy,
}
