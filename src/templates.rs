//! Fixed content fragments for every file the engine can emit.
//!
//! Fragments ending in `_TMPL` are tera templates rendered against a context
//! hydrated from the selection (`typescript` flag, `source_ext`, category
//! labels); the rest are written through verbatim.

pub const GITIGNORE: &str = r#"# dependencies
/node_modules

# production
/build

# misc
.DS_Store
.env.local
.env.development.local
.env.test.local
.env.production.local

yarn-debug.log*
yarn-error.log*
"#;

pub const README_TMPL: &str = r#"# {{ framework }} Boilerplate

This project was bootstrapped with a custom {{ framework }} boilerplate.

## Available Scripts

In the project directory, you can run:

### `yarn dev`

Runs the app in the development mode.
Open [http://localhost:3000](http://localhost:3000) to view it in the browser.

### `yarn build`

Builds the app for production to the `build` folder.

### `yarn start`

Runs the app in production mode.

### `yarn lint`

Lints the project files using ESLint.

### `yarn format`

Formats the project files using Prettier.
"#;

pub const README_MOBILE_TMPL: &str = r#"# {{ framework }} Boilerplate

This project was bootstrapped with a custom {{ framework }} boilerplate.

## Available Scripts

### `yarn start`

Starts the Metro bundler.

### `yarn android` / `yarn ios`

Builds and runs the app on a connected device or emulator.
"#;

pub const README_BACKEND_TMPL: &str = r#"# {{ framework }} Boilerplate

This project was bootstrapped with a custom {{ framework }} boilerplate.

## Available Scripts

### `yarn dev`

Runs the server with automatic reloads.

### `yarn start`

Runs the server.
"#;

pub const ENV_WEB: &str = r#"REACT_APP_API_URL=http://localhost:3000/api
"#;

pub const ENV_BACKEND: &str = r#"PORT=3000
DATABASE_URL=
"#;

pub const ESLINTRC_TMPL: &str = r#"module.exports = {
  extends: [
    'eslint:recommended',
    'plugin:react/recommended',
{% if typescript %}    'plugin:@typescript-eslint/recommended',
{% endif %}    'prettier'
  ],
  parser: {% if typescript %}'@typescript-eslint/parser'{% else %}'@babel/eslint-parser'{% endif %},
  plugins: ['react'{% if typescript %}, '@typescript-eslint'{% endif %}],
  parserOptions: {
    ecmaVersion: 2021,
    sourceType: 'module',
    ecmaFeatures: {
      jsx: true
    }
  },
  rules: {},
  settings: {
    react: {
      version: 'detect'
    }
  }
};
"#;

pub const PRETTIERRC: &str = r#"{
  "semi": true,
  "trailingComma": "all",
  "singleQuote": true,
  "printWidth": 100,
  "tabWidth": 2
}
"#;

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>React App</title>
  </head>
  <body>
    <noscript>You need to enable JavaScript to run this app.</noscript>
    <div id="root"></div>
  </body>
</html>
"#;

pub const INDEX_CSS_BASE: &str = r#"body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
    'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
    sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

code {
  font-family: source-code-pro, Menlo, Monaco, Consolas, 'Courier New',
    monospace;
}
"#;

pub const INDEX_CSS_TAILWIND: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;
"#;

pub const INDEX_ENTRY_TMPL: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import './index.css';
import App from './App';

const root = ReactDOM.createRoot(document.getElementById('root'){% if typescript %} as HTMLElement{% endif %});
root.render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#;

pub const APP_SHELL_TMPL: &str = r#"import React from 'react';

function App() {
  return (
    <div className="App">
      <header className="App-header">
        <h1>Welcome to React</h1>
        <p>
          Edit <code>src/App.{{ source_ext }}</code> and save to reload.
        </p>
      </header>
    </div>
  );
}

export default App;
"#;

pub const APP_SHELL_TAILWIND_TMPL: &str = r#"import React from 'react';

function App() {
  return (
    <div className="text-center">
      <header className="bg-gray-800 min-h-screen flex flex-col items-center justify-center text-white">
        <h1 className="text-4xl font-bold mb-4">Welcome to React with Tailwind CSS</h1>
        <p className="text-xl">
          Edit <code className="bg-gray-700 px-1 rounded">src/App.{{ source_ext }}</code> and save to reload.
        </p>
      </header>
    </div>
  );
}

export default App;
"#;

pub const COMPONENT_TEMPLATE_TMPL: &str = r#"import React from 'react';
{% if typescript %}
interface Props {}

const Component: React.FC<Props> = () => {
{% else %}
const Component = () => {
{% endif %}  return <div />;
};

export default Component;
"#;

pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    "./src/**/*.{js,jsx,ts,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

pub const POSTCSS_CONFIG: &str = r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

pub const REDUX_STORE_TMPL: &str = r#"import { configureStore } from '@reduxjs/toolkit';
import appReducer from './appSlice';

export const store = configureStore({
  reducer: {
    app: appReducer,
  },
});
{% if typescript %}
export type RootState = ReturnType<typeof store.getState>;
export type AppDispatch = typeof store.dispatch;
{% endif %}"#;

pub const REDUX_SLICE_TMPL: &str = r#"import { createSlice } from '@reduxjs/toolkit';

const initialState = {
  ready: false,
};

const appSlice = createSlice({
  name: 'app',
  initialState,
  reducers: {
    setReady(state, action) {
      state.ready = action.payload;
    },
  },
});

export const { setReady } = appSlice.actions;
export default appSlice.reducer;
"#;

pub const MOBX_STORE_TMPL: &str = r#"import { makeAutoObservable } from 'mobx';

class AppStore {
  ready = false;

  constructor() {
    makeAutoObservable(this);
  }

  setReady(value{% if typescript %}: boolean{% endif %}) {
    this.ready = value;
  }
}

export const appStore = new AppStore();
"#;

pub const MOBILE_APP_TMPL: &str = r#"import React from 'react';
import Home from './screens/Home';

export default function App() {
  return <Home />;
}
"#;

pub const MOBILE_HOME_TMPL: &str = r#"import React from 'react';
import { View, Text } from 'react-native';

export default function Home() {
  return (
    <View>
      <Text>Welcome to your {{ language }} React Native project!</Text>
    </View>
  );
}
"#;

pub const BACKEND_INDEX_TMPL: &str = r#"import express from 'express';
import dotenv from 'dotenv';
import router from './routes/{{ route_module }}';

dotenv.config();

const app = express();
const port = process.env.PORT || 3000;

app.use('/api', router);

app.listen(port, () => {
  console.log(`Server listening on port ${port}`);
});
"#;

pub const BACKEND_REST_ROUTE: &str = r#"import express from 'express';

const router = express.Router();

router.get('/', (req, res) => {
  res.send('Welcome to your REST API');
});

export default router;
"#;

pub const BACKEND_GRAPHQL_ROUTE: &str = r#"import { ApolloServer, gql } from 'apollo-server-express';

const typeDefs = gql`
  type Query {
    message: String
  }
`;

const resolvers = {
  Query: {
    message: () => 'Welcome to your GraphQL API',
  },
};

export const server = new ApolloServer({ typeDefs, resolvers });
"#;
