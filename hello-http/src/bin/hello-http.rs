use hello_http::{logging, Config, LambdaRequest, Responder};
use lamedh_runtime::{handler_fn, run, Context, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init()?;

    let responder = Responder::new(Config::default());
    run(handler_fn(move |event: LambdaRequest, ctx: Context| responder.invoke(event, ctx))).await?;
    Ok(())
}
