//! # Help Text
//!
//! Greeting and command overview.
//! Displayed to the user via the `/start` and `/help` commands.

pub const MAIN: &str = concat!(
    "Привет! 👋\n",
    "Пиши название напитка — пришлю рецепт.\n",
    "\n",
    "**Команды:**\n",
    "* /tabs — список вкладок\n",
    "* /tabs Классика — список напитков в категории\n",
    "* /list слово — список совпадений по названию\n",
    "* /all слово — все совпадения рецептами\n",
    "* Просто напиши число из списка, и я пришлю рецепт.\n"
);
