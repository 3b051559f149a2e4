pub const EMPTY_ROUTER: &str = "import Ember from 'ember';
import config from './config/environment';

var Router = Ember.Router.extend({
  location: config.locationType
});

Router.map(function() {
});

export default Router;
";

pub const ROUTER_WITH_USERS: &str = "import Ember from 'ember';
import config from './config/environment';

var Router = Ember.Router.extend({
  location: config.locationType
});

Router.map(function() {
  this.resource('users');
});

export default Router;
";

pub const ROUTER_WITH_FOOS_USERS: &str = "import Ember from 'ember';
import config from './config/environment';

var Router = Ember.Router.extend({
  location: config.locationType
});

Router.map(function() {
  this.resource('foos');
  this.resource('users');
});

export default Router;
";

/// A hand-edited router with nested routes, comments and blank lines.
pub const HAND_EDITED_ROUTER: &str = "import Ember from 'ember';

var Router = Ember.Router.extend();

Router.map(function() {
    // top-level resources { braces in comments are ignored }
    this.resource(\"users\");

    this.resource('posts', function() {
        this.route('new');
    });

    this.route('about', { path: '/about-us' });
});

export default Router;
";

pub const ROUTER_WITHOUT_BLOCK: &str = "import Ember from 'ember';

var Router = Ember.Router.extend();

export default Router;
";
